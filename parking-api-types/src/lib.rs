mod parking_log;
mod scalar;
mod vehicle;

pub mod search;

pub use parking_log::ParkingLog;
pub use scalar::Scalar;
pub use search::SearchResponse;
pub use vehicle::Vehicle;

/// The value of an optional column, or `None` when it is missing, `null`
/// or blank (see [`Scalar::is_blank`]).
pub fn present(value: &Option<Scalar>) -> Option<&Scalar> {
    value.as_ref().filter(|v| !v.is_blank())
}
