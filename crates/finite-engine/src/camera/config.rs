use crate::coords::WorldPos;

/// Camera tuning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub start_position: WorldPos,
    /// Half the visible width in world units.
    pub start_zoom: f32,
    /// World units per second per held direction.
    pub pan_speed: f32,
    /// Zoom change per wheel notch.
    pub zoom_step: f32,
    pub min_zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: WorldPos::new(0.0, 0.0),
            start_zoom: 10.0,
            pan_speed: 10.0,
            zoom_step: 1.0,
            min_zoom: 1.0,
        }
    }
}
