use serde::{Deserialize, Serialize};

use crate::Scalar;

/// One entry/exit record from `parking_logs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingLog {
    /// Opaque, shown as-is.
    pub id: Option<Scalar>,
    pub plate_number: Option<Scalar>,
    pub time_in: Option<Scalar>,
    pub time_out: Option<Scalar>,
    pub parking_area: Option<Scalar>,
}
