use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Point;
use crate::error::{SectorError, SectorResult};
use crate::render::{
    Color, RasterContext, RenderFrame, Renderer, SectorPrimitive, TextHAlign,
    execute_raster_commands, synthesize_raster_commands,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub sectors_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SectorResult<()>;
}

/// Raster backend on Cairo + Pango + PangoCairo.
///
/// Sectors are drawn by replaying [`synthesize_raster_commands`] on the Cairo
/// context. Two modes are supported:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> SectorResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SectorError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> SectorResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> SectorResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| SectorError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> SectorResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for primitive in &frame.sectors {
            let commands = synthesize_raster_commands(&primitive.sector);
            let mut raster = CairoRasterContext::new(context, primitive);
            execute_raster_commands(&mut raster, &commands)?;
            stats.sectors_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SectorResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> SectorResult<()> {
        self.render_with_context(context, frame)
    }
}

/// Cairo adapter for [`RasterContext`], carrying one sector's paint style.
struct CairoRasterContext<'a> {
    context: &'a Context,
    fill: Color,
    stroke: Color,
    stroke_width: f64,
}

impl<'a> CairoRasterContext<'a> {
    fn new(context: &'a Context, primitive: &SectorPrimitive) -> Self {
        Self {
            context,
            fill: primitive.fill,
            stroke: primitive.stroke,
            stroke_width: primitive.stroke_width,
        }
    }
}

impl RasterContext for CairoRasterContext<'_> {
    fn save(&mut self) -> SectorResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))
    }

    fn restore(&mut self) -> SectorResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.context.scale(x, y);
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, point: Point) {
        self.context.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.context.line_to(point.x, point.y);
    }

    fn arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        if anticlockwise {
            self.context
                .arc_negative(center.x, center.y, radius, start_angle, end_angle);
        } else {
            self.context
                .arc(center.x, center.y, radius, start_angle, end_angle);
        }
    }

    fn fill_stroke(&mut self) -> SectorResult<()> {
        apply_color(self.context, self.fill);
        if self.stroke_width > 0.0 {
            self.context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill sector", err))?;
            apply_color(self.context, self.stroke);
            self.context.set_line_width(self.stroke_width);
            self.context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke sector", err))
        } else {
            self.context
                .fill()
                .map_err(|err| map_backend_error("failed to fill sector", err))
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> SectorError {
    SectorError::InvalidData(format!("{prefix}: {err}"))
}
