#![forbid(unsafe_code)]

mod plot;

use plot::draw_chart;
use salary_chart::data::{DEFAULT_JOB, Database};
use salary_chart::scene::{Scene, compose};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{HtmlCanvasElement, console};

/// Job title selected when the page first renders the chart.
#[wasm_bindgen]
pub fn default_job() -> String {
    DEFAULT_JOB.to_string()
}

#[wasm_bindgen]
pub struct State {
    db: Option<Database>,
    scene: Option<Scene>,
}

#[wasm_bindgen]
impl State {
    /// Decodes the dataset bundle fetched by the page.
    #[wasm_bindgen(constructor)]
    pub fn new(data: &[u8]) -> Self {
        let db = match postcard::from_bytes::<Database>(data) {
            Ok(db) => Some(db),
            Err(e) => {
                console::error_1(&JsValue::from_str(&format!("Failed to load data: {e:?}")));
                None
            }
        };
        Self { db, scene: None }
    }

    /// Job title dropdown options.
    pub fn jobs(&self) -> Vec<String> {
        match &self.db {
            None => Vec::new(),
            Some(db) => db.jobs.clone(),
        }
    }

    /// State dropdown options, the wildcard sentinel first.
    pub fn states(&self) -> Vec<String> {
        match &self.db {
            None => Vec::new(),
            Some(db) => db.state_options(),
        }
    }

    /// Re-runs the pipeline for the selection and redraws the canvas.
    pub fn plot(
        &mut self,
        canvas: HtmlCanvasElement,
        job: &str,
        state: &str,
    ) -> Result<(), JsValue> {
        match &self.db {
            None => Err("Failed to load data".into()),
            Some(db) => {
                let scene = compose(&db.records, job, state, canvas.width(), canvas.height());
                draw_chart(canvas, &scene)?;
                self.scene = Some(scene);
                Ok(())
            }
        }
    }

    /// Tooltip markup for the bar under the pointer, in canvas coordinates.
    /// `None` once the pointer leaves every bar.
    pub fn tooltip(&self, x: f64, y: f64) -> Option<String> {
        self.scene
            .as_ref()
            .and_then(|scene| scene.hit(x, y))
            .map(str::to_string)
    }
}
