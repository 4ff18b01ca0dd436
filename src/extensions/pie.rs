use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::decimal_to_f64;
use crate::core::{Point, Sector, compute_sector, contains_point, direction, rotated, to_radians};
use crate::error::{SectorError, SectorResult};
use crate::extensions::palette::ColorAssigner;
use crate::render::Color;

/// Mid-angles above this many degrees put the label on the left.
pub const LABEL_SIDE_THRESHOLD_DEGREES: f64 = 190.0;

/// One value of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub value: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl DatasetEntry {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
            color: None,
        }
    }

    pub fn from_decimal(value: Decimal) -> SectorResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Accepted shapes of chart input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PieData {
    /// A single percentage, drawn as two slices `p` and `100 - p`.
    Percentage(f64),
    Values(Vec<f64>),
    Entries(Vec<DatasetEntry>),
}

impl PieData {
    #[must_use]
    pub fn into_entries(self) -> Vec<DatasetEntry> {
        match self {
            Self::Percentage(percent) => {
                let share = percent / 100.0;
                vec![DatasetEntry::new(share), DatasetEntry::new(1.0 - share)]
            }
            Self::Values(values) => values.into_iter().map(DatasetEntry::new).collect(),
            Self::Entries(entries) => entries,
        }
    }
}

impl From<Vec<DatasetEntry>> for PieData {
    fn from(entries: Vec<DatasetEntry>) -> Self {
        Self::Entries(entries)
    }
}

impl From<Vec<f64>> for PieData {
    fn from(values: Vec<f64>) -> Self {
        Self::Values(values)
    }
}

impl From<f64> for PieData {
    fn from(percent: f64) -> Self {
        Self::Percentage(percent)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayoutOptions {
    /// Emit leader lines for labels.
    #[serde(default = "default_labels")]
    pub labels: bool,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    /// Gap between the slice edge and the leader line, in pixels.
    #[serde(default = "default_buffer")]
    pub buffer: f64,
    #[serde(default = "default_leader_length")]
    pub leader_length: f64,
}

impl Default for PieLayoutOptions {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            colors: None,
            buffer: default_buffer(),
            leader_length: default_leader_length(),
        }
    }
}

impl PieLayoutOptions {
    #[must_use]
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_leader(mut self, buffer: f64, leader_length: f64) -> Self {
        self.buffer = buffer;
        self.leader_length = leader_length;
        self
    }

    pub fn validate(&self) -> SectorResult<()> {
        for (value, name) in [
            (self.buffer, "buffer"),
            (self.leader_length, "leader_length"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SectorError::InvalidData(format!(
                    "pie option `{name}` must be finite and >= 0"
                )));
            }
        }
        for color in self.colors.iter().flatten() {
            Color::from_hex(color)?;
        }
        Ok(())
    }
}

/// Side of the leader line the label text sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    End,
}

/// Three-point label polyline: slice edge, elbow, horizontal end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaderLine {
    pub start: Point,
    pub elbow: Point,
    pub end: Point,
}

impl LeaderLine {
    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.start, self.elbow, self.end]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub index: usize,
    pub sector: Sector,
    pub value: f64,
    pub share: f64,
    pub color: String,
    pub label: String,
    pub label_text: String,
    /// Mid-angle in configured degrees.
    pub direction: f64,
    pub leader: Option<LeaderLine>,
    pub text_anchor: TextAnchor,
}

/// Ordered slices of one chart, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub sum: f64,
    pub slices: Vec<PieSlice>,
}

impl ChartLayout {
    /// Index of the slice under `point`; shared edges belong to the later slice.
    ///
    /// Zero-span slices draw nothing and are never hit.
    #[must_use]
    pub fn slice_at(&self, point: Point, tolerance: f64) -> Option<usize> {
        self.slices
            .iter()
            .filter(|slice| !slice.sector.angles.is_zero_span())
            .find(|slice| contains_point(&slice.sector, point, tolerance))
            .map(|slice| slice.index)
    }

    /// Gives every slice the vertical radius of a projected ellipse.
    pub fn set_radius_y(&mut self, radius_y: Option<f64>) {
        for slice in &mut self.slices {
            slice.sector.radius_y = radius_y;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Partitions `dataset` into adjacent sectors around `center`.
///
/// Slices start at 0 degrees and follow input order without sorting. Empty
/// datasets, non-finite values and non-positive sums are rejected; a zero
/// value still gets a zero-span slice. Entry and palette colors must be
/// `#RGB` or `#RRGGBB`.
pub fn layout_chart(
    center: Point,
    dataset: &[DatasetEntry],
    radius: f64,
    options: &PieLayoutOptions,
) -> SectorResult<ChartLayout> {
    options.validate()?;
    if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
        return Err(SectorError::InvalidData(
            "pie center must be finite and radius finite and >= 0".to_owned(),
        ));
    }
    if dataset.is_empty() {
        return Err(SectorError::InvalidDataset(
            "dataset must not be empty".to_owned(),
        ));
    }
    if dataset.iter().any(|entry| !entry.value.is_finite()) {
        return Err(SectorError::InvalidDataset(
            "dataset values must be finite".to_owned(),
        ));
    }
    for color in dataset.iter().filter_map(|entry| entry.color.as_deref()) {
        if !color.is_empty() {
            Color::from_hex(color)?;
        }
    }

    let sum: f64 = dataset.iter().map(|entry| entry.value).sum();
    if sum <= 0.0 {
        return Err(SectorError::InvalidDataset(format!(
            "dataset sum must be > 0, got {sum}"
        )));
    }

    let mut colors = ColorAssigner::new(options.colors.as_deref());
    let mut running = 0.0;
    let mut slices = Vec::with_capacity(dataset.len());

    for (index, entry) in dataset.iter().enumerate() {
        let share = entry.value / sum;
        let start_angle = running;
        let stop_angle = running + share * 360.0;
        running = stop_angle;

        let color = match &entry.color {
            Some(color) if !color.is_empty() => color.clone(),
            _ => colors.next_color(),
        };
        let mid = direction(start_angle, stop_angle);
        let text_anchor = if mid > LABEL_SIDE_THRESHOLD_DEGREES {
            TextAnchor::End
        } else {
            TextAnchor::Start
        };
        let leader = options
            .labels
            .then(|| leader_line(center, mid, radius, options));

        slices.push(PieSlice {
            index,
            sector: compute_sector(center, radius, None, 0.0, start_angle, stop_angle),
            value: entry.value,
            share,
            color,
            label: entry.label.clone(),
            label_text: format_slice_label(&entry.label, share),
            direction: mid,
            leader,
            text_anchor,
        });
    }

    trace!(count = slices.len(), sum, "pie layout");
    Ok(ChartLayout { sum, slices })
}

fn leader_line(center: Point, mid: f64, radius: f64, options: &PieLayoutOptions) -> LeaderLine {
    let angle = to_radians(mid);
    let length = options.leader_length;
    let start = rotated(center, angle, radius + options.buffer);
    let elbow = rotated(center, angle, radius + options.buffer + length);
    let dx = if mid > LABEL_SIDE_THRESHOLD_DEGREES {
        -length
    } else {
        length
    };
    LeaderLine {
        start,
        elbow,
        end: elbow + Point::new(dx, 0.0),
    }
}

/// `"xx.x%"`, or `"label (xx.x%)"` when a label is set.
///
/// The percentage is rounded to one decimal and a trailing `.0` is dropped.
#[must_use]
pub fn format_slice_label(label: &str, share: f64) -> String {
    let percent = (share * 1000.0).round() / 10.0;
    if label.is_empty() {
        format!("{percent}%")
    } else {
        format!("{label} ({percent}%)")
    }
}

fn default_labels() -> bool {
    true
}

fn default_buffer() -> f64 {
    2.0
}

fn default_leader_length() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::{PieData, format_slice_label};

    #[test]
    fn percentage_input_splits_into_two_parts() {
        let entries = PieData::Percentage(25.0).into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, 0.25);
        assert_eq!(entries[1].value, 0.75);
    }

    #[test]
    fn label_text_rounds_to_one_decimal() {
        assert_eq!(format_slice_label("", 0.25), "25%");
        assert_eq!(format_slice_label("apples", 1.0 / 3.0), "apples (33.3%)");
    }
}
