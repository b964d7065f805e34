//! Pipeline for the interactive salary statistics bar chart, shared between
//! the native analysis tool and the browser frontend.
//!
//! [`data`] holds the dataset model and the selection filter, [`aggregate`]
//! reduces records to per-experience-level statistics, [`scale`] and
//! [`scene`] lay the chart out, and [`paint`] draws a composed scene onto
//! any plotters backend.

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod data;
pub mod format;
pub mod paint;
pub mod scale;
pub mod scene;
