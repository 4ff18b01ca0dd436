use crate::core::Viewport;
use crate::error::{SectorError, SectorResult};
use crate::render::{LinePrimitive, SectorPrimitive, TextPrimitive};

/// Backend-agnostic scene for one draw pass.
///
/// A frame is built completely before any renderer sees it, so a backend
/// never observes a half-updated set of sectors.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub sectors: Vec<SectorPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            sectors: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sector(mut self, sector: SectorPrimitive) -> Self {
        self.sectors.push(sector);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> SectorResult<()> {
        if !self.viewport.is_valid() {
            return Err(SectorError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for sector in &self.sectors {
            sector.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}
