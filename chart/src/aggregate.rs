use crate::data::SalaryRecord;
use log::debug;
use std::collections::BTreeMap;

/// Reduced statistics for one experience level, rebuilt from the filtered
/// records on every selection change.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceGroup {
    pub key: String,
    pub min: f64,
    pub lower: f64,
    pub median: f64,
    pub mean: f64,
    pub upper: f64,
    pub max: f64,
    pub count: u64,
}

struct Accumulator {
    min: f64,
    max: f64,
    lower_sum: f64,
    median_sum: f64,
    mean_sum: f64,
    upper_sum: f64,
    count: u64,
    records: usize,
}

impl Accumulator {
    fn new() -> Self {
        Accumulator {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            lower_sum: 0.0,
            median_sum: 0.0,
            mean_sum: 0.0,
            upper_sum: 0.0,
            count: 0,
            records: 0,
        }
    }

    fn add(&mut self, record: &SalaryRecord) {
        self.min = self.min.min(record.min);
        self.max = self.max.max(record.max);
        self.lower_sum += record.lower_quantile;
        self.median_sum += record.median;
        self.mean_sum += record.mean;
        self.upper_sum += record.upper_quantile;
        self.count += u64::from(record.count);
        self.records += 1;
    }

    fn finish(self, key: &str) -> ExperienceGroup {
        let n = self.records as f64;
        ExperienceGroup {
            key: key.to_string(),
            min: self.min,
            lower: self.lower_sum / n,
            median: self.median_sum / n,
            mean: self.mean_sum / n,
            upper: self.upper_sum / n,
            max: self.max,
            count: self.count,
        }
    }
}

/// Groups records by experience level and reduces each group to its seven
/// statistics: extreme min and max, summed record count, and unweighted means
/// of the quartile and mean columns. A record stands for one (job title,
/// state) cell, not for its underlying posting count. Groups come back in
/// descending key order; an empty input yields an empty vector.
pub fn aggregate(records: &[&SalaryRecord]) -> Vec<ExperienceGroup> {
    let mut partitions: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for record in records {
        partitions
            .entry(record.experience.as_str())
            .or_insert_with(Accumulator::new)
            .add(record);
    }
    debug!(
        "Aggregated {} records into {} experience groups",
        records.len(),
        partitions.len()
    );
    partitions
        .into_iter()
        .rev()
        .map(|(key, accumulator)| accumulator.finish(key))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::record;

    fn scenario() -> Vec<SalaryRecord> {
        vec![
            record(
                "x",
                "NY",
                "senior",
                [50000.0, 60000.0, 70000.0, 71000.0, 80000.0, 90000.0],
                5,
            ),
            record(
                "x",
                "CA",
                "senior",
                [40000.0, 55000.0, 65000.0, 66000.0, 75000.0, 85000.0],
                3,
            ),
        ]
    }

    #[test]
    fn merges_records_of_one_experience_level() {
        let records = scenario();
        let refs: Vec<&SalaryRecord> = records.iter().collect();
        assert_eq!(
            aggregate(&refs),
            [ExperienceGroup {
                key: "senior".into(),
                min: 40000.0,
                lower: 57500.0,
                median: 67500.0,
                mean: 68500.0,
                upper: 77500.0,
                max: 90000.0,
                count: 8,
            }]
        );
    }

    #[test]
    fn yields_one_group_per_experience_level() {
        let records = vec![
            record("x", "NY", "entry", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 4),
            record("x", "CA", "mid", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 2),
            record("x", "WA", "mid", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 1),
            record("x", "TX", "senior", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 6),
        ];
        let refs: Vec<&SalaryRecord> = records.iter().collect();
        let groups = aggregate(&refs);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["senior", "mid", "entry"]);
        let counts: Vec<u64> = groups.iter().map(|g| g.count).collect();
        assert_eq!(counts, [6, 3, 4]);
    }

    #[test]
    fn orders_keys_lexically_descending() {
        let records = vec![
            record("x", "NY", "a", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 1),
            record("x", "NY", "c", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 1),
            record("x", "NY", "b", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 1),
            record("x", "NY", "d", [1.0, 2.0, 3.0, 3.0, 4.0, 5.0], 1),
        ];
        let refs: Vec<&SalaryRecord> = records.iter().collect();
        let groups = aggregate(&refs);
        assert!(groups.windows(2).all(|pair| pair[0].key > pair[1].key));
    }

    #[test]
    fn keeps_extreme_min_and_max() {
        let records = vec![
            record(
                "x",
                "NY",
                "senior",
                [30000.0, 60000.0, 70000.0, 71000.0, 80000.0, 95000.0],
                1,
            ),
            record(
                "x",
                "CA",
                "senior",
                [45000.0, 55000.0, 65000.0, 66000.0, 75000.0, 85000.0],
                1,
            ),
        ];
        let refs: Vec<&SalaryRecord> = records.iter().collect();
        let groups = aggregate(&refs);
        assert_eq!(groups[0].min, 30000.0);
        assert_eq!(groups[0].max, 95000.0);
    }

    #[test]
    fn records_weigh_equally_regardless_of_count() {
        let records = vec![
            record("x", "NY", "senior", [10.0, 10.0, 10.0, 10.0, 10.0, 10.0], 1),
            record(
                "x",
                "CA",
                "senior",
                [20.0, 20.0, 20.0, 20.0, 20.0, 20.0],
                10000,
            ),
        ];
        let refs: Vec<&SalaryRecord> = records.iter().collect();
        let groups = aggregate(&refs);
        assert_eq!(groups[0].median, 15.0);
        assert_eq!(groups[0].mean, 15.0);
        assert_eq!(groups[0].count, 10001);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(aggregate(&[]).is_empty());
    }
}
