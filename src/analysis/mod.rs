//! Composite-image analysis: pattern templates and roughness scoring

/// Fixed sub-pattern templates searched for in composite images
pub mod patterns;
/// Orientation search and roughness scoring
pub mod roughness;
