use serde::{Deserialize, Serialize};

use crate::{ParkingLog, Vehicle};

/// Body of `GET /search?q=`.
///
/// Both lists are optional on the wire; a missing list, `null` and `[]` all
/// mean "nothing found". On a backend failure the server still answers with
/// empty lists and fills in `error`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Vec<Vehicle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<ParkingLog>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_deref().unwrap_or_default()
    }

    pub fn logs(&self) -> &[ParkingLog] {
        self.logs.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles().is_empty() && self.logs().is_empty()
    }
}
