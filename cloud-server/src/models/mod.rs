//! Request/response models

pub mod assessment;
pub mod reference;

pub use assessment::{AssessRequest, AssessResponse, ThresholdsResponse};
pub use reference::{ReferenceQuery, ReferenceResponse};
