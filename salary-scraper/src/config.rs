use std::env;

pub const DEFAULT_LANGUAGES: [&str; 9] = [
    "JavaScript",
    "Python",
    "Java",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
];

const SUPERJOB_TOKEN_VAR: &str = "SECRET_TOKEN";
const HEADHUNTER_URL_VAR: &str = "HH_API_URL";
const SUPERJOB_URL_VAR: &str = "SJ_API_URL";

#[derive(Debug, Clone)]
pub struct HeadHunterConfig {
    pub base_url: String,
    /// Region id, `1` is Moscow
    pub area: u32,
    /// Only vacancies published within this many days
    pub period: u32,
    pub currency: String,
    pub user_agent: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru".to_owned(),
            area: 1,
            period: 30,
            currency: "RUR".to_owned(),
            user_agent: concat!("salary-scraper/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuperJobConfig {
    pub base_url: String,
    /// Sent as `X-Api-App-Id`, requests go out without it when unset
    pub token: Option<String>,
    pub town: String,
    pub catalogues: Vec<String>,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru".to_owned(),
            token: None,
            town: "Москва".to_owned(),
            catalogues: vec!["Разработка".to_owned(), "Программирование".to_owned()],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub languages: Vec<String>,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
    /// Languages fetched concurrently per source
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.into_iter().map(String::from).collect(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
            workers: 1,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.superjob.token = env::var(SUPERJOB_TOKEN_VAR).ok();
        if config.superjob.token.is_none() {
            log::warn!(
                "{} not set, SuperJob requests will be sent without an api key",
                SUPERJOB_TOKEN_VAR
            );
        }
        if let Ok(url) = env::var(HEADHUNTER_URL_VAR) {
            config.headhunter.base_url = url;
        }
        if let Ok(url) = env::var(SUPERJOB_URL_VAR) {
            config.superjob.base_url = url;
        }
        config
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_languages_in_order() {
        let config = Config::default();
        assert_eq!(config.languages.first().map(String::as_str), Some("JavaScript"));
        assert_eq!(config.languages.last().map(String::as_str), Some("Go"));
        assert_eq!(config.languages.len(), 9);
        assert_eq!(config.workers, 1);
    }
}
