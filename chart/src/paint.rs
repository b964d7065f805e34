use crate::scene::{ChartView, Rect, Scene, View, X_AXIS_DESC, Y_AXIS_DESC};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{BLACK, Color, FontTransform, IntoFont, RGBColor, TextStyle, WHITE};
use plotters_backend::DrawingBackend;

const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);
const MEDIAN_COLOR: RGBColor = RGBColor(23, 42, 58);
const GRID_COLOR: RGBColor = RGBColor(214, 214, 214);
const TICK_SIZE: i32 = 6;
const LABEL_GAP: i32 = 9;

/// Draws a composed scene onto a drawing area of the same size. The area is
/// cleared first, so repainting a scene replaces the previous one.
pub fn paint<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    area.fill(&WHITE)?;
    match &scene.view {
        View::Empty { message } => paint_empty(area, scene.plot, message),
        View::Populated(chart) => paint_chart(area, scene.plot, chart),
    }
}

fn paint_empty<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot: Rect,
    message: &str,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let style = TextStyle::from(("sans-serif", 16).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    let (cx, cy) = plot.center();
    area.draw(&Text::new(message.to_string(), (cx as i32, cy as i32), style))?;
    Ok(())
}

fn paint_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot: Rect,
    chart: &ChartView,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (x0, y0) = (plot.x0 as i32, plot.y0 as i32);
    let (x1, y1) = (plot.x1 as i32, plot.y1 as i32);
    let label_font = TextStyle::from(("sans-serif", 12).into_font());

    // Value axis: full-height gridline, tick and label per tick, then the
    // axis line itself.
    for tick in &chart.x_ticks {
        let x = tick.x.round() as i32;
        area.draw(&PathElement::new([(x, y0), (x, y1)], GRID_COLOR.stroke_width(1)))?;
        area.draw(&PathElement::new(
            [(x, y1), (x, y1 + TICK_SIZE)],
            BLACK.stroke_width(1),
        ))?;
        area.draw(&Text::new(
            tick.label.as_str(),
            (x, y1 + LABEL_GAP),
            label_font.pos(Pos::new(HPos::Center, VPos::Top)),
        ))?;
    }
    area.draw(&PathElement::new([(x0, y1), (x1, y1)], BLACK.stroke_width(1)))?;

    // Band axis: tick and key label at each band center, then the axis line.
    for tick in &chart.y_ticks {
        let y = tick.y.round() as i32;
        area.draw(&PathElement::new(
            [(x0 - TICK_SIZE, y), (x0, y)],
            BLACK.stroke_width(1),
        ))?;
        area.draw(&Text::new(
            tick.key.as_str(),
            (x0 - LABEL_GAP, y),
            label_font.pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;
    }
    area.draw(&PathElement::new([(x0, y0), (x0, y1)], BLACK.stroke_width(1)))?;

    // Range bars, then the median markers over them.
    for bar in &chart.bars {
        area.draw(&Rectangle::new(corners(bar.rect), BAR_COLOR.filled()))?;
    }
    for bar in &chart.median_bars {
        area.draw(&Rectangle::new(corners(bar.rect), MEDIAN_COLOR.filled()))?;
    }

    // Axis descriptions in the bottom and left margins.
    let desc_font = TextStyle::from(("sans-serif", 16).into_font());
    let (cx, cy) = plot.center();
    area.draw(&Text::new(
        X_AXIS_DESC,
        (cx as i32, y1 + 50),
        desc_font.pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;
    let rotated_font = ("sans-serif", 16).into_font().transform(FontTransform::Rotate270);
    let rotated = TextStyle::from(rotated_font).pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(Y_AXIS_DESC, (x0 - 90, cy as i32), rotated))?;
    Ok(())
}

fn corners(rect: Rect) -> [(i32, i32); 2] {
    [
        (rect.x0.round() as i32, rect.y0.round() as i32),
        (rect.x1.round() as i32, rect.y1.round() as i32),
    ]
}
