use crate::schema::{JobEntry, SalaryData, StateEntry};
use anyhow::Result;
use log::{debug, info, warn};
use salary_chart::data::{Database, SalaryRecord};
use std::fs::File;
use std::io::{BufReader, BufWriter};

/// Bundle consumed by the browser app, decoded to the same [`Database`].
pub const BUNDLE_PATH: &str = "data/salaries.db";

pub fn load_jobs() -> Result<Vec<String>> {
    debug!("Loading job titles");
    let entries: Vec<JobEntry> =
        serde_json::from_reader(BufReader::new(File::open("data/unique_jobs.json")?))?;
    Ok(entries.into_iter().map(|e| e.cleaned_job_title).collect())
}

pub fn load_states() -> Result<Vec<String>> {
    debug!("Loading states");
    let entries: Vec<StateEntry> =
        serde_json::from_reader(BufReader::new(File::open("data/unique_states.json")?))?;
    Ok(entries.into_iter().map(|e| e.state).collect())
}

pub fn load_records() -> Result<Vec<SalaryRecord>> {
    debug!("Loading salary records");
    let data: SalaryData =
        serde_json::from_reader(BufReader::new(File::open("data/salary_data.json")?))?;
    Ok(data.data.into_iter().map(SalaryRecord::from).collect())
}

/// Loads the three provider files into one dataset. Structurally invalid
/// input fails the load; records with out-of-order statistics are only
/// reported and stay in the dataset, the chart draws what the provider
/// supplied.
pub fn load_database() -> Result<Database> {
    let jobs = load_jobs()?;
    let states = load_states()?;
    let records = load_records()?;
    info!(
        "Loaded {} jobs, {} states and {} salary records",
        jobs.len(),
        states.len(),
        records.len()
    );

    let suspect = check_statistic_order(&records);
    if suspect > 0 {
        warn!("{suspect} records have out-of-order statistics");
    }

    Ok(Database {
        jobs,
        states,
        records,
    })
}

/// Counts records violating `min <= lower quartile <= median <= upper
/// quartile <= max`, warning once per record.
pub fn check_statistic_order(records: &[SalaryRecord]) -> usize {
    records
        .iter()
        .filter(|r| {
            let ordered = r.min <= r.lower_quantile
                && r.lower_quantile <= r.median
                && r.median <= r.upper_quantile
                && r.upper_quantile <= r.max;
            if !ordered {
                warn!(
                    "Out-of-order statistics for ({}, {}, {})",
                    r.job_title, r.state, r.experience
                );
            }
            !ordered
        })
        .count()
}

/// Writes the postcard bundle fetched by the browser app. Fails if the
/// bundle already exists.
pub fn save_bundle(db: &Database) -> Result<()> {
    let file = File::create_new(BUNDLE_PATH)?;
    postcard::to_io(db, BufWriter::new(file))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(experience: &str, stats: [f64; 5]) -> SalaryRecord {
        let [min, lower_quantile, median, upper_quantile, max] = stats;
        SalaryRecord {
            job_title: "x".into(),
            state: "NY".into(),
            experience: experience.into(),
            min,
            lower_quantile,
            median,
            mean: median,
            upper_quantile,
            max,
            count: 1,
        }
    }

    #[test]
    fn ordered_statistics_pass() {
        let records = vec![
            record("senior", [1.0, 2.0, 3.0, 4.0, 5.0]),
            record("entry", [2.0, 2.0, 2.0, 2.0, 2.0]),
        ];
        assert_eq!(check_statistic_order(&records), 0);
    }

    #[test]
    fn out_of_order_statistics_are_counted() {
        let records = vec![
            record("senior", [1.0, 2.0, 3.0, 4.0, 5.0]),
            record("mid", [1.0, 3.0, 2.0, 4.0, 5.0]),
            record("entry", [5.0, 2.0, 3.0, 4.0, 1.0]),
        ];
        assert_eq!(check_statistic_order(&records), 2);
    }
}
