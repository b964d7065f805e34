#![forbid(unsafe_code)]

mod load;
mod plot;
mod schema;

use anyhow::Result;
use load::{load_database, save_bundle};
use log::{info, warn};
use plot::plot_salary_chart;
use salary_chart::data::{ALL_STATES, DEFAULT_JOB};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let job = args.next().unwrap_or_else(|| DEFAULT_JOB.to_string());
    let state = args.next().unwrap_or_else(|| ALL_STATES.to_string());

    let db = load_database()?;

    if let Err(e) = save_bundle(&db) {
        warn!("Failed to write bundle: {e:?}");
    }

    let path = plot_salary_chart(&db.records, &job, &state)?;
    info!("Wrote {}", path.display());

    Ok(())
}
