// WebSocket client commands (JSON, tagged by "type")

use std::str::FromStr;

use serde::Deserialize;

use super::{CategoryFilter, Granularity};
use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientCommand {
    SetGranularity { granularity: Granularity },
    SetAlertFilter { category: CategoryFilter },
    ExportCsv,
}

impl FromStr for ClientCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| CommandError::Invalid(e.to_string()))
    }
}
