//! Map-facing layers and the pie chart engine.
mod json_contract;
mod pie_chart;
mod semicircle;

pub use json_contract::{CHART_LAYOUT_JSON_SCHEMA_V1, ChartLayoutJsonContractV1};
pub use pie_chart::{PieChart, PieChartConfig};
pub use semicircle::{PathStyle, SectorLayer, SemiCircle, SemiCircleMarker, SemicircleOptions};

use crate::core::{Projection, Viewport};
use crate::render::RenderFrame;

/// Projects every layer and collects the drawable ones into one frame.
///
/// Layers are drawn in input order. Empty sectors are kept so frame indices
/// match layer indices.
pub fn build_layer_frame(
    projection: &dyn Projection,
    viewport: Viewport,
    layers: &mut [&mut dyn SectorLayer],
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);
    for layer in layers.iter_mut() {
        layer.project(projection);
        if let Some(primitive) = layer.to_primitive() {
            frame.sectors.push(primitive);
        }
    }
    frame
}
