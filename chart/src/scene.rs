use crate::aggregate::{ExperienceGroup, aggregate};
use crate::data::{SalaryRecord, filter_records};
use crate::format::format_money;
use crate::scale::{BandScale, ValueScale};
use log::debug;

/// Default canvas width, in pixels.
pub const CHART_WIDTH: u32 = 850;
/// Default canvas height, in pixels.
pub const CHART_HEIGHT: u32 = 600;

pub const X_AXIS_DESC: &str = "Annual Salary";
pub const Y_AXIS_DESC: &str = "Experience Qualifier";

const MARGIN_TOP: f64 = 100.0;
const MARGIN_RIGHT: f64 = 100.0;
const MARGIN_BOTTOM: f64 = 100.0;
const MARGIN_LEFT: f64 = 120.0;
const X_TICK_COUNT: usize = 10;
const MEDIAN_BAR_WIDTH: f64 = 2.0;

/// Axis-aligned rectangle in canvas coordinates, `(x0, y0)` top left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// A drawn bar together with the tooltip markup it answers hits with.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub rect: Rect,
    pub tooltip: String,
}

/// One value-axis tick: gridline position and its currency label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

/// One band-axis tick: the experience key at its band center.
#[derive(Clone, Debug, PartialEq)]
pub struct BandTick {
    pub y: f64,
    pub key: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum View {
    /// Nothing matched the selection; the message is shown in the plot area.
    Empty { message: String },
    Populated(ChartView),
}

/// Everything a painter needs to draw a populated chart, in canvas
/// coordinates: gridlines and labels from the tick lists, then `bars`, then
/// `median_bars` on top.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<BandTick>,
    pub bars: Vec<Bar>,
    pub median_bars: Vec<Bar>,
}

/// Complete description of one drawn chart. Composing a scene is pure:
/// the same records and selection always produce an identical scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub plot: Rect,
    pub view: View,
}

impl Scene {
    /// Tooltip markup of the bar under the pointer, if any. Median bars are
    /// drawn over the range bars, so they win the hit.
    pub fn hit(&self, x: f64, y: f64) -> Option<&str> {
        let View::Populated(chart) = &self.view else {
            return None;
        };
        chart
            .median_bars
            .iter()
            .chain(&chart.bars)
            .find(|bar| bar.rect.contains(x, y))
            .map(|bar| bar.tooltip.as_str())
    }
}

/// Runs the pipeline for one selection: filter, aggregate, derive scales and
/// lay out bars, ticks and tooltip payloads. A selection with no matching
/// records yields the empty view without deriving any scale.
pub fn compose(records: &[SalaryRecord], job: &str, state: &str, width: u32, height: u32) -> Scene {
    let plot = plot_area(width, height);
    let filtered = filter_records(records, job, state);
    if filtered.is_empty() {
        debug!("Empty selection ({job:?}, {state:?})");
        return Scene {
            plot,
            view: View::Empty {
                message: format!("No data for {job} in {state}."),
            },
        };
    }

    let groups = aggregate(&filtered);
    let value = ValueScale::fit(&groups, plot.width());
    let band = BandScale::fit(
        groups.iter().map(|g| g.key.clone()).collect(),
        plot.height(),
    );

    let x_ticks = value
        .ticks(X_TICK_COUNT)
        .into_iter()
        .map(|tick| Tick {
            x: plot.x0 + value.scale(tick),
            label: format_money(tick),
        })
        .collect();
    let y_ticks = band
        .bands()
        .map(|(key, top)| BandTick {
            y: plot.y0 + top + band.bandwidth() / 2.0,
            key: key.to_string(),
        })
        .collect();

    let mut bars = Vec::with_capacity(groups.len());
    let mut median_bars = Vec::with_capacity(groups.len());
    for (group, (_, band_top)) in groups.iter().zip(band.bands()) {
        let top = plot.y0 + band_top;
        let bottom = top + band.bandwidth();
        bars.push(Bar {
            rect: Rect {
                x0: plot.x0 + value.scale(group.lower),
                y0: top,
                x1: plot.x0 + value.scale(group.upper),
                y1: bottom,
            },
            tooltip: range_tooltip(group),
        });
        let center = plot.x0 + value.scale(group.median);
        median_bars.push(Bar {
            rect: Rect {
                x0: center - MEDIAN_BAR_WIDTH / 2.0,
                y0: top,
                x1: center + MEDIAN_BAR_WIDTH / 2.0,
                y1: bottom,
            },
            tooltip: median_tooltip(group),
        });
    }

    Scene {
        plot,
        view: View::Populated(ChartView {
            x_ticks,
            y_ticks,
            bars,
            median_bars,
        }),
    }
}

fn plot_area(width: u32, height: u32) -> Rect {
    let x0 = MARGIN_LEFT;
    let y0 = MARGIN_TOP;
    Rect {
        x0,
        y0,
        x1: (f64::from(width) - MARGIN_RIGHT).max(x0 + 1.0),
        y1: (f64::from(height) - MARGIN_BOTTOM).max(y0 + 1.0),
    }
}

fn range_tooltip(group: &ExperienceGroup) -> String {
    format!(
        "Experience Qualifier: {}<br>\
         <span>Min: {}</span><br>\
         <span> Lower Quartile: {}</span><br>\
         <span> Median: {}</span><br>\
         <span> Mean: {}</span><br>\
         <span> Upper Quartile: {}</span><br>\
         <span> Max: {}</span><br>\
         <span> Total Records: {}",
        group.key,
        format_money(group.min),
        format_money(group.lower),
        format_money(group.median),
        format_money(group.mean),
        format_money(group.upper),
        format_money(group.max),
        group.count,
    )
}

fn median_tooltip(group: &ExperienceGroup) -> String {
    format!(
        "Experience: {}<br>\
         <span>Min: {}</span><br>\
         <span> Lower Quartile: {}</span><br>\
         <span> Median: {}</span><br>\
         <span> Mean: {}</span><br>\
         <span> Upper Quartile: {}</span><br>\
         <span> Max: {}</span><br>\
         <span> Count: {}",
        group.key,
        format_money(group.min),
        format_money(group.lower),
        format_money(group.median),
        format_money(group.mean),
        format_money(group.upper),
        format_money(group.max),
        group.count,
    )
}
