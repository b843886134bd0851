use std::f32::consts::PI;

use thiserror::Error;

/// Errors in the fixed startup configuration. Configuration is immutable
/// after initialization, so these can only surface once, at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("viewport must be non-empty, got {w}x{h}")]
    Viewport { w: usize, h: usize },

    #[error("field of view must lie in (0, π) radians, got {0}")]
    FieldOfView(f32),

    #[error("ray count must be non-zero")]
    RayCount,
}

/// Constants that depend on the frame-buffer, not on the map.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Result<Self, ConfigError> {
        if w == 0 || h == 0 {
            return Err(ConfigError::Viewport { w, h });
        }
        Ok(Self { w, h })
    }
}

/// Angular layout of one frame's ray fan: an explicit field of view divided
/// over an explicit ray count, instead of a hardcoded degrees-per-ray step.
#[derive(Clone, Copy, Debug)]
pub struct RayFan {
    fov: f32,
    count: usize,
}

impl RayFan {
    /// `fov` in radians, strictly between 0 and π.
    pub fn new(fov: f32, count: usize) -> Result<Self, ConfigError> {
        if !(fov.is_finite() && fov > 0.0 && fov < PI) {
            return Err(ConfigError::FieldOfView(fov));
        }
        if count == 0 {
            return Err(ConfigError::RayCount);
        }
        Ok(Self { fov, count })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn half_fov(&self) -> f32 {
        self.fov * 0.5
    }

    /// Angular distance between adjacent rays.
    #[inline]
    pub fn angle_step(&self) -> f32 {
        self.fov / self.count as f32
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
