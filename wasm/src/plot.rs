use plotters::prelude::IntoDrawingArea;
use plotters_canvas::CanvasBackend;
use salary_chart::paint::paint;
use salary_chart::scene::Scene;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

/// Paints a composed scene onto the page canvas, replacing whatever was
/// drawn before.
pub fn draw_chart(canvas: HtmlCanvasElement, scene: &Scene) -> Result<(), JsValue> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("Failed to create backend")?;

    let root = backend.into_drawing_area();
    paint(&root, scene).map_err(|e| format!("Failed to draw chart: {e:?}"))?;

    root.present()
        .map_err(|e| format!("Failed to present chart: {e:?}"))?;
    Ok(())
}
