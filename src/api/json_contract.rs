use serde::{Deserialize, Serialize};

use crate::error::{SectorError, SectorResult};
use crate::extensions::ChartLayout;
use crate::render::Renderer;

use super::PieChart;

pub const CHART_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: ChartLayout,
}

impl ChartLayout {
    pub fn to_json_contract_v1_pretty(&self) -> SectorResult<String> {
        let payload = ChartLayoutJsonContractV1 {
            schema_version: CHART_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SectorError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts either a bare layout or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SectorResult<Self> {
        if let Ok(layout) = serde_json::from_str::<ChartLayout>(input) {
            return Ok(layout);
        }
        let payload: ChartLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            SectorError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != CHART_LAYOUT_JSON_SCHEMA_V1 {
            return Err(SectorError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}

impl<R: Renderer> PieChart<R> {
    /// Contract for the latest layout; errors before the first layout pass.
    pub fn layout_json_contract_v1_pretty(&self) -> SectorResult<String> {
        self.last_layout()
            .ok_or_else(|| SectorError::InvalidData("pie chart has no layout yet".to_owned()))?
            .to_json_contract_v1_pretty()
    }
}
