pub mod algorithm;
pub mod domain;
pub mod handles;
pub mod snap;

pub use algorithm::{
    GeometricAlgorithm, LinearAlgorithm, POSITION_MAX, POSITION_MIN, PositionAlgorithm,
};
pub use domain::Domain;
pub use handles::{HandleVec, closest_handle, validate_values};
pub use snap::closest_snap_point;
