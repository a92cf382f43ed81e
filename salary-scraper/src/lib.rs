pub mod aggregate;
pub mod config;
pub mod pipeline;
pub mod report;
pub mod salary;
pub mod source;

use reqwest::{header::InvalidHeaderValue, StatusCode};
use thiserror::Error;

pub use aggregate::LanguageRow;
pub use config::Config;
pub use salary::SalaryBound;
pub use source::{headhunter::HeadHunter, superjob::SuperJob, JobSource, Page};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk { url: String, status: StatusCode },
    #[error("Invalid header value: '{0}'")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("No vacancies with salary data found for '{language}'")]
    NoSalaryData { language: String },
}
