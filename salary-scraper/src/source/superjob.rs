use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use serde::Deserialize;

use crate::config::SuperJobConfig;
use crate::salary::SalaryBound;
use crate::source::{get_json, JobSource, Page};
use crate::Result;

const API_KEY_HEADER: &str = "x-api-app-id";

#[derive(Deserialize, Debug)]
struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct ApiResponse {
    total: u64,
    #[serde(default)]
    objects: Vec<Vacancy>,
}

impl From<ApiResponse> for Page {
    fn from(resp: ApiResponse) -> Self {
        Page {
            found: resp.total,
            pages: None,
            listings: resp.objects.len(),
            bounds: resp
                .objects
                .into_iter()
                .map(|vacancy| SalaryBound::new(vacancy.payment_from, vacancy.payment_to))
                .collect(),
        }
    }
}

/// superjob.ru vacancy search. Signals the end of results with an empty page.
pub struct SuperJob {
    client: Client,
    config: SuperJobConfig,
}

impl SuperJob {
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            headers.insert(API_KEY_HEADER, HeaderValue::from_str(token)?);
        }
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    fn vacancies_url(&self) -> String {
        format!("{}/2.0/vacancies/", self.config.base_url.trim_end_matches('/'))
    }

    fn query(&self, language: &str, page: Option<u32>) -> Vec<(&'static str, String)> {
        let mut query = vec![("keyword", language.to_owned())];
        query.extend(
            self.config
                .catalogues
                .iter()
                .map(|catalogue| ("catalogues", catalogue.to_owned())),
        );
        query.push(("town", self.config.town.to_owned()));
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

#[async_trait]
impl JobSource for SuperJob {
    fn name(&self) -> &str {
        "SuperJob"
    }

    async fn fetch_page(&self, language: &str, page: Option<u32>) -> Result<Page> {
        log::debug!(
            "requesting vacancies from superjob, page: {:?}, language: {}",
            page,
            language
        );
        let request = self
            .client
            .get(self.vacancies_url())
            .query(&self.query(language, page));
        let resp: ApiResponse = get_json(request).await?;
        Ok(resp.into())
    }

    fn is_exhausted(&self, _page_index: u32, page: &Page) -> bool {
        page.listings == 0
    }
}
