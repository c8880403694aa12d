//! Mosaic composition and request orchestration

/// Concurrent per-cell compositing into a shared canvas
pub mod compositor;
/// End-to-end mosaic request pipeline
pub mod engine;
