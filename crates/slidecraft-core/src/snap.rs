//! Grid snapping for object positions and sizes.

use serde::{Deserialize, Serialize};

/// Default grid size (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Smallest grid size the editor accepts.
pub const MIN_GRID_SIZE: f64 = 5.0;

/// Largest grid size the editor accepts.
pub const MAX_GRID_SIZE: f64 = 100.0;

/// Visual grid and snapping configuration.
///
/// Snapping only applies when the grid is both shown and set to snap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub enabled: bool,
    pub size: f64,
    pub snap: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            size: GRID_SIZE,
            snap: true,
        }
    }
}

impl GridSettings {
    /// Grid settings with snapping turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            size: GRID_SIZE,
            snap: false,
        }
    }

    /// Enabled, snapping grid of the given size.
    pub fn snapping(size: f64) -> Self {
        Self {
            enabled: true,
            size,
            snap: true,
        }
    }

    /// Check if values should be snapped.
    pub fn is_snapping(&self) -> bool {
        self.enabled && self.snap && self.size > 0.0
    }

    /// Snap a single coordinate, or return it unchanged when snapping is off.
    pub fn snap_value(&self, value: f64) -> f64 {
        if self.is_snapping() {
            snap_value(value, self.size)
        } else {
            value
        }
    }
}

/// Round `value` to the nearest multiple of `grid_size`.
///
/// Halfway values round towards positive infinity, so `-10` on a grid of
/// 20 becomes `0`, and `10` becomes `20`.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    (value / grid_size + 0.5).floor() * grid_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_value_exact() {
        assert_eq!(snap_value(40.0, 20.0), 40.0);
        assert_eq!(snap_value(60.0, 20.0), 60.0);
    }

    #[test]
    fn test_snap_value_round_up() {
        assert_eq!(snap_value(31.0, 20.0), 40.0);
        assert_eq!(snap_value(113.0, 20.0), 120.0);
    }

    #[test]
    fn test_snap_value_round_down() {
        assert_eq!(snap_value(29.0, 20.0), 20.0);
        assert_eq!(snap_value(107.0, 20.0), 100.0);
    }

    #[test]
    fn test_halfway_rounds_towards_positive_infinity() {
        assert_eq!(snap_value(10.0, 20.0), 20.0);
        assert_eq!(snap_value(110.0, 20.0), 120.0);
        assert_eq!(snap_value(-10.0, 20.0), 0.0);
        assert_eq!(snap_value(-10.5, 20.0), -20.0);
    }

    #[test]
    fn test_disabled_grid_passes_through() {
        let grid = GridSettings::disabled();
        assert_eq!(grid.snap_value(113.0), 113.0);
        assert!(!grid.is_snapping());
    }

    #[test]
    fn test_visible_grid_without_snap_passes_through() {
        let grid = GridSettings {
            enabled: true,
            size: 20.0,
            snap: false,
        };
        assert!(!grid.is_snapping());
        assert_eq!(grid.snap_value(113.0), 113.0);
    }
}
