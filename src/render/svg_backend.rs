use std::fmt::Write as _;

use crate::error::SectorResult;
use crate::render::{RenderFrame, Renderer, TextHAlign, synthesize_vector_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub paths_written: usize,
    pub lines_written: usize,
    pub texts_written: usize,
}

/// Vector backend: serializes each frame into a standalone SVG document.
///
/// Sector outlines come from [`synthesize_vector_path`], one `<path>` per
/// sector in frame order.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the latest `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SectorResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for primitive in &frame.sectors {
            let _ = writeln!(
                out,
                r#"  <path d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}" fill-rule="nonzero"/>"#,
                synthesize_vector_path(&primitive.sector),
                primitive.fill.to_hex(),
                primitive.fill.alpha,
                primitive.stroke.to_hex(),
                primitive.stroke.alpha,
                primitive.stroke_width,
            );
            stats.paths_written += 1;
        }

        for line in &frame.lines {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.color.to_hex(),
                line.stroke_width,
            );
            stats.lines_written += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" fill="{}">{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                text.color.to_hex(),
                escape_text(&text.text),
            );
            stats.texts_written += 1;
        }

        out.push_str("</svg>\n");
        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
