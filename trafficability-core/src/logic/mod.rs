//! Assessment engine modules
//!
//! - `assessment`: measurement types, threshold rules, and the risk classifier
//! - `advisory`: recommendation text per overall risk level
//! - `reference`: agronomy definitions lookup

pub mod advisory;
pub mod assessment;
pub mod reference;
