//! Camera module for pan/zoom of the slide canvas.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Default minimum zoom level.
pub const MIN_ZOOM: f64 = 0.1;
/// Default maximum zoom level.
pub const MAX_ZOOM: f64 = 5.0;

/// Camera manages the view transform for the canvas.
///
/// It converts between screen coordinates and document coordinates. The
/// zoom is a view concern only and never reaches object transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen pixels.
    pub offset: Vec2,
    /// Current zoom level (1.0 = 100%).
    pub zoom: f64,
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with custom zoom limits.
    pub fn with_limits(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            min_zoom,
            max_zoom,
            zoom: 1.0_f64.clamp(min_zoom, max_zoom),
            ..Self::default()
        }
    }

    /// Get the inverse transform for input handling (screen to document).
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to document coordinates.
    pub fn screen_to_document(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Set the zoom level, clamped to the camera limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Reset camera to default position and zoom.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new();
        assert_eq!(camera.offset, Vec2::ZERO);
        assert!((camera.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_document_with_offset() {
        let mut camera = Camera::new();
        camera.offset = Vec2::new(50.0, 100.0);
        let doc = camera.screen_to_document(Point::new(100.0, 200.0));
        assert!((doc.x - 50.0).abs() < f64::EPSILON);
        assert!((doc.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_document_with_zoom() {
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        let doc = camera.screen_to_document(Point::new(100.0, 200.0));
        assert!((doc.x - 50.0).abs() < f64::EPSILON);
        assert!((doc.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut camera = Camera::new();
        camera.set_zoom(0.01);
        assert!((camera.zoom - MIN_ZOOM).abs() < f64::EPSILON);
        camera.set_zoom(42.0);
        assert!((camera.zoom - MAX_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_clears_pan_and_zoom() {
        let mut camera = Camera::with_limits(0.5, 3.0);
        camera.offset = Vec2::new(40.0, -10.0);
        camera.set_zoom(2.5);
        camera.reset();
        assert_eq!(camera.offset, Vec2::ZERO);
        assert!((camera.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_document_with_pan_and_zoom() {
        let mut camera = Camera::new();
        camera.offset = Vec2::new(30.0, 15.0);
        camera.set_zoom(2.0);
        let doc = camera.screen_to_document(Point::new(230.0, 115.0));
        assert!((doc.x - 100.0).abs() < 1e-9);
        assert!((doc.y - 50.0).abs() < 1e-9);
    }
}
