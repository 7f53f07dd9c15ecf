use hillside_core::Walker;
use macroquad::prelude::*;

use crate::atmosphere::Lighting;

#[derive(Debug, Clone)]
pub struct WalkerDrawConfig {
    pub torso_size: Vec3,
    pub torso_height: f32,
    pub head_radius: f32,
    pub head_height: f32,
    pub leg_size: Vec3,
    pub hip_height: f32,
    pub stance_half_width: f32,
    pub shirt_color: Color,
    pub skin_color: Color,
    pub pants_color: Color,
}

impl Default for WalkerDrawConfig {
    fn default() -> Self {
        Self {
            torso_size: vec3(0.4, 0.6, 0.2),
            torso_height: 1.0,
            head_radius: 0.2,
            head_height: 1.6,
            leg_size: vec3(0.1, 0.8, 0.1),
            hip_height: 0.4,
            stance_half_width: 0.1,
            shirt_color: Color::new(0.8, 0.6, 0.4, 1.0),
            skin_color: Color::new(1.0, 0.8, 0.6, 1.0),
            pants_color: Color::new(0.2, 0.2, 0.8, 1.0),
        }
    }
}

/// Forward and side unit vectors on the ground plane for a facing angle in
/// degrees, clockwise from +z.
pub fn facing_frame(angle_degrees: f32) -> (Vec2, Vec2) {
    let radians = angle_degrees.to_radians();
    let forward = vec2(radians.sin(), radians.cos());
    let side = vec2(forward.y, -forward.x);
    (forward, side)
}

/// Forward displacement of a leg swung `leg_angle` degrees about the hip.
pub fn leg_swing_offset(leg_angle: f32, hip_height: f32) -> f32 {
    leg_angle.to_radians().sin() * hip_height
}

pub fn draw_walker(walker: &Walker, config: &WalkerDrawConfig, light: &Lighting) {
    let base = vec3(walker.x, 0.0, walker.z);
    let (forward, side) = facing_frame(walker.angle);
    let forward = vec3(forward.x, 0.0, forward.y);
    let side = vec3(side.x, 0.0, side.y);

    draw_cube(
        base + vec3(0.0, config.torso_height, 0.0),
        config.torso_size,
        None,
        light.shade(config.shirt_color),
    );
    draw_sphere(
        base + vec3(0.0, config.head_height, 0.0),
        config.head_radius,
        None,
        light.shade(config.skin_color),
    );

    // Legs counter-swing; an axis-aligned stand-in for the hip rotation.
    let swing = leg_swing_offset(walker.leg_angle, config.hip_height);
    let hip = vec3(0.0, config.hip_height, 0.0);
    let pants = light.shade(config.pants_color);
    let left = base + hip - side * config.stance_half_width + forward * swing;
    let right = base + hip + side * config.stance_half_width - forward * swing;
    draw_cube(left, config.leg_size, None, pants);
    draw_cube(right, config.leg_size, None, pants);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_zero_points_along_positive_z() {
        let (forward, side) = facing_frame(0.0);
        assert!((forward - vec2(0.0, 1.0)).length() < 1e-6);
        assert!((side - vec2(1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn facing_ninety_points_along_positive_x() {
        let (forward, side) = facing_frame(90.0);
        assert!((forward - vec2(1.0, 0.0)).length() < 1e-6);
        assert!(forward.dot(side).abs() < 1e-6);
    }

    #[test]
    fn leg_swing_is_symmetric_about_straight_legs() {
        assert_eq!(leg_swing_offset(0.0, 0.4), 0.0);

        let ahead = leg_swing_offset(15.0, 0.4);
        let behind = leg_swing_offset(-15.0, 0.4);
        assert!(ahead > 0.0);
        assert!((ahead + behind).abs() < 1e-6);
        assert!(ahead < 0.4);
    }
}
