use log::trace;
use serde::{Deserialize, Serialize};

/// Job title selected when the chart first renders.
pub const DEFAULT_JOB: &str = "account executive";

/// Sentinel state selection matching every state.
pub const ALL_STATES: &str = "All";

/// One salary summary: the pre-computed distribution of salaries observed for
/// a (job title, state, experience level) combination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub job_title: String,
    pub state: String,
    pub experience: String,
    pub min: f64,
    pub lower_quantile: f64,
    pub median: f64,
    pub mean: f64,
    pub upper_quantile: f64,
    pub max: f64,
    pub count: u32,
}

/// The compiled dataset consumed by the browser app: the dropdown contents
/// and the full record list, in provider order.
#[derive(Debug, Serialize, Deserialize)]
pub struct Database {
    pub jobs: Vec<String>,
    pub states: Vec<String>,
    pub records: Vec<SalaryRecord>,
}

impl Database {
    /// State dropdown options: the wildcard sentinel first, then the states
    /// as provided.
    pub fn state_options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.states.len() + 1);
        options.push(ALL_STATES.to_string());
        options.extend(self.states.iter().cloned());
        options
    }
}

/// Keeps the records matching the selected job title and state. [`ALL_STATES`]
/// matches every state. An empty result is a valid outcome, not an error.
pub fn filter_records<'a>(
    records: &'a [SalaryRecord],
    job: &str,
    state: &str,
) -> Vec<&'a SalaryRecord> {
    let filtered: Vec<&SalaryRecord> = records
        .iter()
        .filter(|r| r.job_title == job && (r.state == state || state == ALL_STATES))
        .collect();
    trace!(
        "{} of {} records match ({job:?}, {state:?})",
        filtered.len(),
        records.len()
    );
    filtered
}

#[cfg(test)]
pub(crate) fn record(
    job: &str,
    state: &str,
    experience: &str,
    stats: [f64; 6],
    count: u32,
) -> SalaryRecord {
    let [min, lower_quantile, median, mean, upper_quantile, max] = stats;
    SalaryRecord {
        job_title: job.into(),
        state: state.into(),
        experience: experience.into(),
        min,
        lower_quantile,
        median,
        mean,
        upper_quantile,
        max,
        count,
    }
}
