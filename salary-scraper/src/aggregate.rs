use crate::{Error, Result};

/// Salary estimates of every processed page of one (language, source) run.
pub type Pagination = Vec<Vec<u64>>;

/// Number of vacancies that produced a salary estimate.
pub fn processed(pagination: &[Vec<u64>]) -> usize {
    pagination.iter().map(Vec::len).sum()
}

/// Floored mean of all estimates, `None` when nothing was processed.
/// Summed as `u128`, the mean of `u64` values always fits back into `u64`.
pub fn average(pagination: &[Vec<u64>]) -> Option<u64> {
    let total: u128 = pagination.iter().flatten().map(|&estimate| u128::from(estimate)).sum();
    let mean = total.checked_div(processed(pagination) as u128)?;
    u64::try_from(mean).ok()
}

/// One row of a source's summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub language: String,
    pub found: u64,
    pub processed: usize,
    pub average: u64,
}

impl LanguageRow {
    pub fn from_pagination(language: &str, found: u64, pagination: &[Vec<u64>]) -> Result<Self> {
        let average = average(pagination).ok_or_else(|| Error::NoSalaryData {
            language: language.to_owned(),
        })?;
        Ok(Self {
            language: language.to_owned(),
            found,
            processed: processed(pagination),
            average,
        })
    }
}
