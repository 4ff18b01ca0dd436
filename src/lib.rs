//! semicircle-rs: sector, semicircle and ring shapes for map overlays.
//!
//! Geometry lives in [`core`] and is backend agnostic. [`render`] turns a
//! [`core::Sector`] into an SVG path string or an immediate-mode command
//! sequence, and [`extensions`] partitions datasets into pie charts.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use crate::api::{PieChart, PieChartConfig, SectorLayer, SemiCircle, SemiCircleMarker};
pub use crate::core::{Sector, compute_sector, hit_test, project_inner_radius};
pub use crate::error::{SectorError, SectorResult};
pub use crate::extensions::layout_chart;
pub use crate::render::{synthesize_raster_commands, synthesize_vector_path};
