use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::HeadHunterConfig;
use crate::salary::SalaryBound;
use crate::source::{get_json, JobSource, Page};
use crate::Result;

#[derive(Deserialize, Debug)]
struct Salary {
    currency: Option<String>,
    from: Option<f64>,
    to: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Deserialize, Debug)]
struct ApiResponse {
    found: u64,
    pages: Option<u32>,
    #[serde(default)]
    items: Vec<Vacancy>,
}

impl ApiResponse {
    /// Keep only vacancies paying in `currency`
    fn into_page(self, currency: &str) -> Page {
        let listings = self.items.len();
        let bounds = self
            .items
            .into_iter()
            .filter_map(|vacancy| vacancy.salary)
            .filter(|salary| salary.currency.as_deref() == Some(currency))
            .map(|salary| SalaryBound::new(salary.from, salary.to))
            .collect();
        Page {
            found: self.found,
            pages: self.pages,
            listings,
            bounds,
        }
    }
}

/// hh.ru vacancy search. Reports a page count on every response.
pub struct HeadHunter {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunter {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/vacancies", self.config.base_url.trim_end_matches('/'))
    }

    fn query(&self, language: &str, page: Option<u32>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("text", language.to_owned()),
            ("only_with_salary", "true".to_owned()),
            ("period", self.config.period.to_string()),
            ("area", self.config.area.to_string()),
        ];
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

#[async_trait]
impl JobSource for HeadHunter {
    fn name(&self) -> &str {
        "HeadHunter"
    }

    async fn fetch_page(&self, language: &str, page: Option<u32>) -> Result<Page> {
        log::debug!(
            "requesting vacancies from headhunter, page: {:?}, language: {}",
            page,
            language
        );
        let request = self
            .client
            .get(self.vacancies_url())
            .query(&self.query(language, page));
        let resp: ApiResponse = get_json(request).await?;
        Ok(resp.into_page(&self.config.currency))
    }

    fn is_exhausted(&self, page_index: u32, page: &Page) -> bool {
        page.pages.map_or(true, |pages| page_index >= pages)
    }
}
