//! Proximity tests and portal exits
//!
//! Collision in this world is deliberately crude: two ground points touch
//! when they are within a threshold on both axes independently.

use glam::Vec2;

use super::state::Portal;
use crate::heading;

/// Axis-wise proximity: `|dx| <= epsilon && |dz| <= epsilon`
#[inline]
pub fn within(a: Vec2, b: Vec2, epsilon: f32) -> bool {
    let d = (a - b).abs();
    d.x <= epsilon && d.y <= epsilon
}

/// Where a mover arrives when leaving through `portal`.
///
/// The mover is pushed out along the portal's facing, whose rotation is
/// negated to match the world's yaw convention.
pub fn portal_exit(portal: &Portal, pushback: f32) -> Vec2 {
    portal.pos + heading(-portal.rotation) * pushback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PortalRole;

    #[test]
    fn test_within_is_axis_wise() {
        let a = Vec2::new(1.0, 1.0);
        assert!(within(a, Vec2::new(1.1, 0.9), 0.15));
        // Diagonal distance ~0.198 still counts
        assert!(within(a, Vec2::new(1.14, 1.14), 0.15));
        assert!(!within(a, Vec2::new(1.2, 1.0), 0.15));
        assert!(within(a, a, 0.0));
    }

    #[test]
    fn test_portal_exit_direction() {
        let east = Portal::new(Vec2::new(2.0, 2.0), 0.0, PortalRole::First);
        let exit = portal_exit(&east, 0.3);
        assert!((exit - Vec2::new(2.3, 2.0)).length() < 1e-5);

        // Rotation 90 faces -z in ground coordinates
        let north = Portal::new(Vec2::new(2.0, 2.0), 90.0, PortalRole::Second);
        let exit = portal_exit(&north, 0.3);
        assert!((exit - Vec2::new(2.0, 1.7)).length() < 1e-5);
    }
}
