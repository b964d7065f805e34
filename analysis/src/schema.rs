use salary_chart::data::SalaryRecord;
use serde::Deserialize;

/// Entry of `unique_jobs.json`, the job title dropdown contents.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobEntry {
    pub cleaned_job_title: String,
}

/// Entry of `unique_states.json`, the state dropdown contents.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateEntry {
    pub state: String,
}

/// `salary_data.json`: one record per (job title, state, experience level)
/// combination, carrying the pre-computed summary statistics of the postings
/// behind it.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SalaryData {
    pub data: Vec<RecordEntry>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordEntry {
    pub cleaned_job_title: String,
    pub state: String,
    pub experiences: String,
    pub min: f64,
    pub lower_quantile: f64,
    pub median: f64,
    pub mean: f64,
    pub upper_quantile: f64,
    pub max: f64,
    pub count: u32,
}

impl From<RecordEntry> for SalaryRecord {
    fn from(entry: RecordEntry) -> Self {
        SalaryRecord {
            job_title: entry.cleaned_job_title,
            state: entry.state,
            experience: entry.experiences,
            min: entry.min,
            lower_quantile: entry.lower_quantile,
            median: entry.median,
            mean: entry.mean,
            upper_quantile: entry.upper_quantile,
            max: entry.max,
            count: entry.count,
        }
    }
}
