//! Collision response helpers
//!
//! Directional velocity inversion only; there is no mass, restitution or
//! impulse model. Callers decide which body reacts.

use glam::Vec2;

use crate::geom::Rect;

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Flip the velocity component along the translation vector's axis
///
/// `mtv` points away from the obstacle (as returned for shape A by
/// `polygon_collision`). Velocity already moving away is left alone so a body
/// that is still overlapping after one bounce does not flip back into it.
pub fn bounce_velocity(velocity: Vec2, mtv: Vec2) -> Vec2 {
    let normal = mtv.normalize_or_zero();
    if normal == Vec2::ZERO || velocity.dot(normal) >= 0.0 {
        return velocity;
    }
    reflect_velocity(velocity, normal)
}

/// Push a position out of overlap by the translation vector
#[inline]
pub fn separate(position: Vec2, mtv: Vec2) -> Vec2 {
    position + mtv
}

/// Keep a box inside `area` by inverting velocity at the walls
///
/// Returns the corrected velocity and the offset needed to bring the box back
/// inside. Only walls the box is moving toward reverse the velocity.
pub fn bounce_inside(bounds: &Rect, area: &Rect, velocity: Vec2) -> (Vec2, Vec2) {
    let mut v = velocity;
    let mut correction = Vec2::ZERO;

    if bounds.left() < area.left() {
        correction.x = area.left() - bounds.left();
        if v.x < 0.0 {
            v.x = -v.x;
        }
    } else if bounds.right() > area.right() {
        correction.x = area.right() - bounds.right();
        if v.x > 0.0 {
            v.x = -v.x;
        }
    }

    if bounds.top() < area.top() {
        correction.y = area.top() - bounds.top();
        if v.y < 0.0 {
            v.y = -v.y;
        }
    } else if bounds.bottom() > area.bottom() {
        correction.y = area.bottom() - bounds.bottom();
        if v.y > 0.0 {
            v.y = -v.y;
        }
    }

    (v, correction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_velocity() {
        // Ball moving right, hits vertical wall (normal pointing left)
        let reflected = reflect_velocity(Vec2::new(100.0, 0.0), Vec2::new(-1.0, 0.0));
        assert!((reflected.x + 100.0).abs() < 0.001);
        assert!(reflected.y.abs() < 0.001);
    }

    #[test]
    fn test_bounce_inverts_only_into_obstacle() {
        let v = Vec2::new(30.0, 40.0);
        // Obstacle below: push is upward, ball moving down -> y flips
        assert_eq!(bounce_velocity(v, Vec2::new(0.0, -2.0)), Vec2::new(30.0, -40.0));
        // Already moving away from the obstacle
        assert_eq!(bounce_velocity(v, Vec2::new(0.0, 2.0)), v);
        // No overlap, no change
        assert_eq!(bounce_velocity(v, Vec2::ZERO), v);
    }

    #[test]
    fn test_separate() {
        assert_eq!(separate(Vec2::new(1.0, 1.0), Vec2::new(0.0, -5.0)), Vec2::new(1.0, -4.0));
    }

    #[test]
    fn test_bounce_inside_walls() {
        let area = Rect::new(0.0, 0.0, 800.0, 600.0);
        let ball = Rect::new(795.0, -3.0, 10.0, 10.0);
        let (v, fix) = bounce_inside(&ball, &area, Vec2::new(50.0, -20.0));
        assert_eq!(v, Vec2::new(-50.0, 20.0));
        assert_eq!(fix, Vec2::new(-5.0, 3.0));

        let inside = Rect::new(100.0, 100.0, 10.0, 10.0);
        let (v, fix) = bounce_inside(&inside, &area, Vec2::new(50.0, -20.0));
        assert_eq!(v, Vec2::new(50.0, -20.0));
        assert_eq!(fix, Vec2::ZERO);
    }
}
