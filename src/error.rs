use thiserror::Error;

/// Rejected inputs to the clipping solver.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("clip proportion must lie strictly between 0 and 1, got {0}")]
    InvalidProportion(f32),
    #[error("sphere radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid clipping configuration: {0}")]
    Geometry(#[from] GeometryError),
    #[error("zoom step must be positive, got {0}")]
    ZoomStep(i32),
    #[error("zoom limits must be non-negative and span a range, got lower={lower} upper={upper}")]
    ZoomRange { lower: i32, upper: i32 },
    #[error("orbit distance range is empty or negative: min={min} max={max}")]
    DistanceRange { min: f32, max: f32 },
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}
