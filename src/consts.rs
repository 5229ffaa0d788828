use crate::float::Float;

/// Basis vectors must be unit length and orthogonal within this tolerance
pub const BASIS_TOLERANCE: Float = 1e-5;

/// Near plane of the default projection
pub const NEAR_PLANE: Float = 0.01;
/// Far plane of the default projection
pub const FAR_PLANE: Float = 100.0;

/// Pitch is kept inside this band to keep yaw meaningful at the poles
pub const PITCH_LIMIT: Float = 89.0;
/// Absolute field-of-view bounds in degrees
pub const MIN_FOV: Float = 1.0;
pub const MAX_FOV: Float = 90.0;
