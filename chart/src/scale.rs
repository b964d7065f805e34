use crate::aggregate::ExperienceGroup;

/// Padding, in currency units, applied to both ends of the value domain so
/// bars never touch the plot edges.
pub const DOMAIN_PAD: f64 = 1000.0;

/// Fraction of a band step left empty between and around bands.
pub const BAND_PADDING: f64 = 0.1;

/// Maps salary values linearly onto horizontal pixel offsets within the plot
/// area.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueScale {
    domain: (f64, f64),
    width: f64,
}

impl ValueScale {
    /// Derives the domain from the aggregated groups: padded minimum of the
    /// lower quartiles to padded maximum of the upper quartiles. `groups`
    /// must be non-empty; an empty selection never reaches scale derivation.
    pub fn fit(groups: &[ExperienceGroup], width: f64) -> ValueScale {
        let lo = groups.iter().map(|g| g.lower).fold(f64::INFINITY, f64::min);
        let hi = groups
            .iter()
            .map(|g| g.upper)
            .fold(f64::NEG_INFINITY, f64::max);
        ValueScale {
            domain: (lo - DOMAIN_PAD, hi + DOMAIN_PAD),
            width,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel offset of `value`, measured from the left plot edge. Values
    /// outside the domain extrapolate.
    pub fn scale(&self, value: f64) -> f64 {
        let (start, stop) = self.domain;
        (value - start) / (stop - start) * self.width
    }

    /// Round tick values covering the domain: multiples of 1, 2 or 5 times a
    /// power of ten, spaced so that roughly `count` of them fit.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = self.domain;
        let span = stop - start;
        if count == 0 || span <= 0.0 {
            return Vec::new();
        }
        let raw_step = span / count as f64;
        let base = 10f64.powf(raw_step.log10().floor());
        let error = raw_step / base;
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        let step = factor * base;
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Assigns each experience key a horizontal band of the plot area. Bands are
/// laid out top-down in key order with [`BAND_PADDING`] of one step kept
/// empty between and around them.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    keys: Vec<String>,
    step: f64,
    bandwidth: f64,
    outer: f64,
}

impl BandScale {
    /// `keys` must be non-empty and already in display order, first key on
    /// top.
    pub fn fit(keys: Vec<String>, height: f64) -> BandScale {
        let step = height / (keys.len() as f64 + BAND_PADDING);
        BandScale {
            keys,
            step,
            bandwidth: step * (1.0 - BAND_PADDING),
            outer: step * BAND_PADDING,
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Top edge of the band assigned to `key`, if present.
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.keys.iter().position(|k| k == key)?;
        Some(self.outer + index as f64 * self.step)
    }

    /// Keys with their band top edges, top to bottom.
    pub fn bands(&self) -> impl Iterator<Item = (&str, f64)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.as_str(), self.outer + index as f64 * self.step))
    }
}
