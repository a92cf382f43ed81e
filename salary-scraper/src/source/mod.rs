pub mod headhunter;
pub mod superjob;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{salary::SalaryBound, Error, Result};

/// One decoded response of a job board, independent of its wire format.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Total vacancies matching the query, across all pages
    pub found: u64,
    /// Page count, for boards that report one
    pub pages: Option<u32>,
    /// Vacancies on this page before any filtering
    pub listings: usize,
    /// Salary ranges of the vacancies that passed the board's filter
    pub bounds: Vec<SalaryBound>,
}

/// A job board that can be paged through for a language keyword.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Title of the board's summary table
    fn name(&self) -> &str;

    /// Request one page of vacancies, `None` queries without a page parameter.
    async fn fetch_page(&self, language: &str, page: Option<u32>) -> Result<Page>;

    /// Whether the response for `page_index` signals that there are no more pages.
    /// An exhausted page is never processed.
    fn is_exhausted(&self, page_index: u32, page: &Page) -> bool;
}

/// Send the request and decode a json body, failing on any non-success status.
pub(crate) async fn get_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let resp = request.send().await?;
    let url = resp.url().to_string();
    if !resp.status().is_success() {
        let status = resp.status();
        let error_body = resp.text().await;
        log::error!(
            "request to {} not successful, status code: {}, error resp body: {:?}",
            url,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk { url, status });
    }
    log::debug!("successfully retrieved {}", url);
    Ok(resp.json().await?)
}
