use macroquad::prelude::*;

use crate::atmosphere::Lighting;

// Layout lifted from the fixed scene: cabin at the origin, tree ring around
// it, hills on the back horizon.
const TREE_SITES: [(f32, f32); 8] = [
    (5.0, 3.0),
    (-6.0, -4.0),
    (8.0, -5.0),
    (6.0, 4.0),
    (-5.0, -6.0),
    (7.0, -7.0),
    (-9.0, 5.0),
    (10.0, 2.0),
];

const GROUND_EXTENT: f32 = 50.0;

const CABIN_WIDTH: f32 = 4.0;
const CABIN_HEIGHT: f32 = 2.0;
const CABIN_DEPTH: f32 = 3.0;
const ROOF_HEIGHT: f32 = 1.5;
const PLANK_HEIGHT: f32 = 0.2;
const ROOF_LAYERS: usize = 6;
const CHIMNEY_X: f32 = -1.2;
const CHIMNEY_Z: f32 = -0.8;
const SMOKE_BASE_HEIGHT: f32 = 3.5;

const GROUND_COLOR: Color = Color::new(0.3, 0.6, 0.2, 1.0);
const HILL_COLOR: Color = Color::new(0.2, 0.5, 0.2, 1.0);
const FLOOR_COLOR: Color = Color::new(0.4, 0.2, 0.1, 1.0);
const DOOR_COLOR: Color = Color::new(0.3, 0.15, 0.05, 1.0);
const WINDOW_COLOR: Color = Color::new(0.5, 0.8, 1.0, 1.0);
const ROOF_COLOR: Color = Color::new(0.4, 0.0, 0.0, 1.0);
const CHIMNEY_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const TRUNK_COLOR: Color = Color::new(0.4, 0.2, 0.1, 1.0);
const FOLIAGE_COLOR: Color = Color::new(0.0, 0.6, 0.0, 1.0);
const CLOUD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.8);
const SMOKE_COLOR: Color = Color::new(0.8, 0.8, 0.8, 0.5);

pub fn draw_ground(light: &Lighting) {
    draw_plane(
        vec3(0.0, 0.0, 0.0),
        vec2(GROUND_EXTENT, GROUND_EXTENT),
        None,
        light.shade(GROUND_COLOR),
    );
}

pub fn draw_hills(light: &Lighting) {
    let color = light.shade(HILL_COLOR);
    // Mounds sunk below the ground plane so only the crowns show.
    draw_sphere(vec3(-15.0, -5.0, -30.0), 12.0, None, color);
    draw_sphere(vec3(15.0, -5.0, -30.0), 12.0, None, color);
}

pub fn draw_cabin(light: &Lighting) {
    let half_depth = CABIN_DEPTH / 2.0;

    // Walls as stacked plank slabs with alternating wood tones.
    let planks = (CABIN_HEIGHT / PLANK_HEIGHT) as usize;
    for plank in 0..planks {
        let y = plank as f32 * PLANK_HEIGHT + PLANK_HEIGHT / 2.0;
        let tone = 0.5 + (plank as f32 * PLANK_HEIGHT * 2.0) % 0.4;
        draw_cube(
            vec3(0.0, y, 0.0),
            vec3(CABIN_WIDTH, PLANK_HEIGHT, CABIN_DEPTH),
            None,
            light.shade(Color::new(tone, 0.25, 0.1, 1.0)),
        );
    }

    // Door and windows sit just proud of the front face.
    draw_cube(
        vec3(0.0, 0.6, half_depth + 0.01),
        vec3(1.0, 1.2, 0.02),
        None,
        light.shade(DOOR_COLOR),
    );
    for window_x in [-1.2, 1.2] {
        draw_cube(
            vec3(window_x, 1.25, half_depth + 0.01),
            vec3(0.6, 0.5, 0.02),
            None,
            light.shade(WINDOW_COLOR),
        );
    }

    // Gabled roof approximated with shrinking slabs.
    let slab_height = ROOF_HEIGHT / ROOF_LAYERS as f32;
    for layer in 0..ROOF_LAYERS {
        let shrink = layer as f32 / ROOF_LAYERS as f32;
        draw_cube(
            vec3(0.0, CABIN_HEIGHT + slab_height * (layer as f32 + 0.5), 0.0),
            vec3(CABIN_WIDTH * (1.0 - shrink), slab_height, CABIN_DEPTH),
            None,
            light.shade(ROOF_COLOR),
        );
    }

    draw_cube(
        vec3(CHIMNEY_X, CABIN_HEIGHT + 0.5, CHIMNEY_Z),
        vec3(0.3, 1.0, 0.3),
        None,
        light.shade(CHIMNEY_COLOR),
    );

    draw_cube(
        vec3(0.0, 0.005, 0.0),
        vec3(CABIN_WIDTH, 0.01, CABIN_DEPTH),
        None,
        light.shade(FLOOR_COLOR),
    );
}

pub fn draw_trees(light: &Lighting) {
    let trunk = light.shade(TRUNK_COLOR);
    let foliage = light.shade(FOLIAGE_COLOR);

    for (x, z) in TREE_SITES {
        draw_cube(vec3(x, 1.0, z), vec3(0.2, 2.0, 0.2), None, trunk);
        draw_sphere(vec3(x, 2.5, z), 0.7, None, foliage);
    }
}

pub fn draw_clouds(solar_angle: f32, light: &Lighting) {
    // The clouds drift slowly as the sun tracks across the sky.
    draw_cloud(vec3(5.0 + 2.0 * solar_angle.sin(), 15.0, -5.0), light);
    draw_cloud(vec3(-10.0 + 2.0 * solar_angle.cos(), 17.0, 6.0), light);
}

fn draw_cloud(center: Vec3, light: &Lighting) {
    let color = light.shade(CLOUD_COLOR);
    draw_sphere(center, 0.8, None, color);
    draw_sphere(center + vec3(0.8, 0.1, 0.0), 0.6, None, color);
    draw_sphere(center + vec3(-0.8, 0.2, 0.0), 0.6, None, color);
}

pub fn draw_smoke(smoke_phase: f32) {
    draw_sphere(
        vec3(CHIMNEY_X, smoke_height(smoke_phase), CHIMNEY_Z),
        0.3,
        None,
        SMOKE_COLOR,
    );
}

/// The puff climbs two units above the chimney mouth, then restarts.
pub fn smoke_height(smoke_phase: f32) -> f32 {
    SMOKE_BASE_HEIGHT + smoke_phase % 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_wraps_every_two_units_of_phase() {
        assert_eq!(smoke_height(0.0), SMOKE_BASE_HEIGHT);
        assert!((smoke_height(0.3) - (SMOKE_BASE_HEIGHT + 0.3)).abs() < 1e-5);
        assert!((smoke_height(2.5) - (SMOKE_BASE_HEIGHT + 0.5)).abs() < 1e-5);
        assert!((smoke_height(7.9) - (SMOKE_BASE_HEIGHT + 1.9)).abs() < 1e-4);
    }

    #[test]
    fn tree_sites_stay_inside_the_wander_bounds() {
        for (x, z) in TREE_SITES {
            assert!(x.abs() < hillside_core::WANDER_LIMIT);
            assert!(z.abs() < hillside_core::WANDER_LIMIT);
        }
    }
}
