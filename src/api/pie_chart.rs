use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{LatLng, Point, Projection, Viewport, project_circle};
use crate::error::{SectorError, SectorResult};
use crate::extensions::{
    ChartLayout, DatasetEntry, PieData, PieLayoutOptions, PieSlice, TextAnchor, layout_chart,
};
use crate::render::{
    Color, LinePrimitive, RenderFrame, Renderer, SectorPrimitive, TextHAlign, TextPrimitive,
};

/// Horizontal gap between a leader line end and its label.
const LABEL_OFFSET_X: f64 = 2.0;
/// Baseline drop so the label sits centered on the leader end.
const LABEL_OFFSET_Y: f64 = 5.0;

/// Bootstrap configuration for a [`PieChart`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub center: LatLng,
    /// Chart radius in meters.
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub layout: PieLayoutOptions,
    #[serde(default = "default_stroke_weight")]
    pub stroke_weight: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
}

impl PieChartConfig {
    #[must_use]
    pub fn new(center: LatLng) -> Self {
        Self {
            center,
            radius: default_radius(),
            layout: PieLayoutOptions::default(),
            stroke_weight: default_stroke_weight(),
            label_font_size_px: default_label_font_size_px(),
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_layout_options(mut self, layout: PieLayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_stroke_weight(mut self, stroke_weight: f64) -> Self {
        self.stroke_weight = stroke_weight;
        self
    }

    pub fn validate(&self) -> SectorResult<()> {
        self.center.validate()?;
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SectorError::InvalidData(
                "pie radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.stroke_weight.is_finite() || self.stroke_weight < 0.0 {
            return Err(SectorError::InvalidData(
                "pie stroke weight must be finite and >= 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(SectorError::InvalidData(
                "pie label font size must be finite and > 0".to_owned(),
            ));
        }
        self.layout.validate()
    }

    pub fn to_json_pretty(&self) -> SectorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SectorError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> SectorResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SectorError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

/// Geographic pie chart driving a [`Renderer`].
///
/// The dataset is replaced wholesale by [`Self::set_data`]; layout is redone
/// against the current projection on every draw.
pub struct PieChart<R: Renderer> {
    renderer: R,
    config: PieChartConfig,
    data: Vec<DatasetEntry>,
    last_layout: Option<ChartLayout>,
}

impl<R: Renderer> PieChart<R> {
    pub fn new(renderer: R, config: PieChartConfig, data: impl Into<PieData>) -> SectorResult<Self> {
        config.validate()?;
        let data = data.into().into_entries();
        debug!(count = data.len(), radius = config.radius, "pie chart created");
        Ok(Self {
            renderer,
            config,
            data,
            last_layout: None,
        })
    }

    /// Replaces every slice; the previous layout is discarded.
    pub fn set_data(&mut self, data: impl Into<PieData>) {
        let data = data.into().into_entries();
        debug!(
            previous_count = self.data.len(),
            count = data.len(),
            "set pie data"
        );
        self.data = data;
        self.last_layout = None;
    }

    #[must_use]
    pub fn data(&self) -> &[DatasetEntry] {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    pub fn set_center(&mut self, center: LatLng) -> SectorResult<()> {
        self.config.center = center.validate()?;
        self.last_layout = None;
        Ok(())
    }

    /// Projects the chart and partitions the dataset around it.
    pub fn layout(&mut self, projection: &dyn Projection) -> SectorResult<&ChartLayout> {
        let circle = project_circle(projection, self.config.center, self.config.radius);
        if circle.fallback.is_some() {
            warn!(
                fallback = ?circle.fallback,
                "pie radius projection used a fallback"
            );
        }
        let mut layout =
            layout_chart(circle.point, &self.data, circle.radius, &self.config.layout)?;
        layout.set_radius_y(circle.radius_y);
        trace!(slices = layout.len(), radius_px = circle.radius, "pie chart layout");
        Ok(self.last_layout.insert(layout))
    }

    #[must_use]
    pub fn last_layout(&self) -> Option<&ChartLayout> {
        self.last_layout.as_ref()
    }

    /// Materializes slices, leader lines and labels for one draw pass.
    ///
    /// Slices follow the projected outer circle, so on Mercator they share the
    /// vertical radius a [`crate::api::SemiCircle`] at the same spot would get.
    pub fn build_render_frame(
        &mut self,
        projection: &dyn Projection,
        viewport: Viewport,
    ) -> SectorResult<RenderFrame> {
        if !viewport.is_valid() {
            return Err(SectorError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let stroke_weight = self.config.stroke_weight;
        let font_size_px = self.config.label_font_size_px;
        let layout = self.layout(projection)?;

        let mut frame = RenderFrame::new(viewport);
        // Zero-value slices keep their labels but paint nothing.
        for slice in layout
            .slices
            .iter()
            .filter(|slice| !slice.sector.angles.is_zero_span())
        {
            let color = Color::from_hex(&slice.color)?;
            frame
                .sectors
                .push(SectorPrimitive::new(slice.sector, color, color, stroke_weight));
        }
        for slice in &layout.slices {
            push_label(&mut frame, slice, font_size_px);
        }
        Ok(frame)
    }

    pub fn render(&mut self, projection: &dyn Projection, viewport: Viewport) -> SectorResult<()> {
        let frame = self.build_render_frame(projection, viewport)?;
        self.renderer.render(&frame)?;
        debug!(
            sectors = frame.sectors.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "rendered pie chart"
        );
        Ok(())
    }

    /// Slice under `point` in the latest layout.
    #[must_use]
    pub fn slice_at(&self, point: Point) -> Option<&PieSlice> {
        let layout = self.last_layout.as_ref()?;
        let index = layout.slice_at(point, self.config.stroke_weight / 2.0)?;
        layout.slices.get(index)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn push_label(frame: &mut RenderFrame, slice: &PieSlice, font_size_px: f64) {
    let Some(leader) = slice.leader else {
        return;
    };
    for (from, to) in [(leader.start, leader.elbow), (leader.elbow, leader.end)] {
        frame.lines.push(LinePrimitive::new(
            from.x,
            from.y,
            to.x,
            to.y,
            1.0,
            Color::BLACK,
        ));
    }

    if slice.label_text.is_empty() {
        return;
    }
    let (x, h_align) = match slice.text_anchor {
        TextAnchor::Start => (leader.end.x + LABEL_OFFSET_X, TextHAlign::Left),
        TextAnchor::End => (leader.end.x - LABEL_OFFSET_X, TextHAlign::Right),
    };
    frame.texts.push(TextPrimitive::new(
        slice.label_text.clone(),
        x,
        leader.end.y + LABEL_OFFSET_Y,
        font_size_px,
        Color::BLACK,
        h_align,
    ));
}

fn default_radius() -> f64 {
    500.0
}

fn default_stroke_weight() -> f64 {
    1.0
}

fn default_label_font_size_px() -> f64 {
    10.0
}
