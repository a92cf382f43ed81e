//! Salary estimation for a single vacancy.
//!
//! A vacancy reports its pay as a range where either end may be missing.
//! The estimate is the midpoint when both ends are known, otherwise the
//! known end scaled towards where the other end would likely be.

const FROM_ONLY_FACTOR: f64 = 1.2;
const TO_ONLY_FACTOR: f64 = 0.8;

/// Salary range of one vacancy, in the currency the source was filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryBound {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

impl SalaryBound {
    pub fn new(from: Option<f64>, to: Option<f64>) -> Self {
        Self { from, to }
    }
}

/// A side equal to zero counts as missing. SuperJob reports an
/// unspecified payment as `0`, so `(0, X)` is estimated from `X` alone.
fn usable(side: Option<f64>) -> Option<f64> {
    side.filter(|value| *value != 0.0)
}

/// Estimate the monthly salary for one bound, `None` if neither side is usable.
pub fn predict_salary(bound: &SalaryBound) -> Option<u64> {
    let estimate = match (usable(bound.from), usable(bound.to)) {
        (Some(from), Some(to)) => (from + to) / 2.0,
        (Some(from), None) => from * FROM_ONLY_FACTOR,
        (None, Some(to)) => to * TO_ONLY_FACTOR,
        (None, None) => return None,
    };
    Some(estimate.floor() as u64)
}

/// Estimates for every usable bound, in input order. Unusable bounds are dropped.
pub fn predict_salaries<'a, I>(bounds: I) -> Vec<u64>
where
    I: IntoIterator<Item = &'a SalaryBound>,
{
    bounds.into_iter().filter_map(predict_salary).collect()
}
