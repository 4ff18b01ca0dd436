//! Chart features layered on the sector core.

pub mod palette;
pub mod pie;

pub use palette::{ColorAssigner, random_color};
pub use pie::{
    ChartLayout, DatasetEntry, LABEL_SIDE_THRESHOLD_DEGREES, LeaderLine, PieData,
    PieLayoutOptions, PieSlice, TextAnchor, format_slice_label, layout_chart,
};
