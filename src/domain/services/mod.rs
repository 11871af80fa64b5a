//! Domain services
//!
//! The carving algorithm and the policy it applies to candidate headers.

mod carver;
mod validator;

pub use carver::{Carver, Carves, DEFAULT_SCAN_STEP};
pub use validator::{
    HeaderValidator, Rejection, ThresholdValidator, MIN_ARCHIVE_SIZE, MPQ_V1_HEADER_SIZE,
};
