use anyhow::Result;
use log::info;
use plotters::prelude::*;
use salary_chart::data::SalaryRecord;
use salary_chart::paint::paint;
use salary_chart::scene::{CHART_HEIGHT, CHART_WIDTH, compose};
use std::fs;
use std::path::PathBuf;

/// Renders the chart for one selection into an SVG snapshot under `plots/`,
/// returning its path. The snapshot shows exactly what the browser app draws
/// for the same selection.
pub fn plot_salary_chart(records: &[SalaryRecord], job: &str, state: &str) -> Result<PathBuf> {
    info!("Creating salary chart for {job:?} in {state:?}");
    fs::create_dir_all("plots")?;

    let path = PathBuf::from(format!(
        "plots/salary-{}-{}.svg",
        file_stem(job),
        file_stem(state)
    ));
    let root = SVGBackend::new(&path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();

    let scene = compose(records, job, state, CHART_WIDTH, CHART_HEIGHT);
    paint(&root, &scene)?;
    root.present()?;
    drop(root);

    Ok(path)
}

fn file_stem(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_stems_are_path_safe() {
        assert_eq!(file_stem("account executive"), "account-executive");
        assert_eq!(file_stem("All"), "All");
        assert_eq!(file_stem("a/b.c"), "a-b-c");
    }
}
