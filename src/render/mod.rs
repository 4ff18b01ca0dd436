mod frame;
mod null_renderer;
mod primitives;
mod raster;
mod strategy;
mod svg_backend;
mod vector_path;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, SectorPrimitive, TextHAlign, TextPrimitive,
};
pub use raster::{
    RasterCommand, RasterCommands, RasterContext, base_circle_commands, execute_raster_commands,
    synthesize_raster_commands,
};
pub use strategy::ShapeStrategy;
pub use svg_backend::{SvgRenderStats, SvgRenderer};
pub use vector_path::{EMPTY_PATH, base_circle_path, synthesize_vector_path};

use crate::error::SectorResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from layout and projection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SectorResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
