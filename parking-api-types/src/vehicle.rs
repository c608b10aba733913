use serde::{Deserialize, Serialize};

use crate::Scalar;

/// A registered vehicle as returned by `/search`.
/// This matches the `users` table columns the backend selects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate_number: Option<Scalar>,
    pub full_name: Option<Scalar>,
    pub vehicle_type: Option<Scalar>,
    pub mobile_no: Option<Scalar>,
}
