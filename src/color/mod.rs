//! Color measurement over pixel regions

/// Region color averaging and channel-space distance
pub mod average;

pub use average::ColorVector;
