//! Config composition: default layer plus ordered overlays.

pub mod merge_policy;
pub mod service;
