use hillside_core::{Environment, Weather};
use macroquad::prelude::*;

const PRECIPITATION_COUNT: usize = 300;
const PRECIPITATION_SPREAD: f32 = 50.0;
const DROP_MIN_HEIGHT: f32 = 5.0;
const DROP_MAX_HEIGHT: f32 = 25.0;
const DROP_LENGTH: f32 = 1.5;

const RAIN_COLOR: Color = Color::new(0.5, 0.5, 1.0, 1.0);
const SNOW_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const FOG_COLOR: Color = Color::new(0.8, 0.8, 0.8, 0.45);
const NIGHT_SKY: Color = Color::new(0.1, 0.1, 0.2, 1.0);

/// Per-frame lighting snapshot derived from the environment clock: the sky
/// clear color and a flat intensity multiplied into every entity color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub sky: Color,
    pub intensity: f32,
}

impl Lighting {
    pub fn for_environment(environment: &Environment) -> Self {
        if environment.day {
            let sky = Color::new(
                0.5 + 0.3 * environment.solar_angle.cos(),
                0.7 + 0.2 * environment.solar_angle.sin(),
                1.0,
                1.0,
            );
            // Sun height drives brightness; the crossover overshoot can push
            // sin slightly negative, hence the floor.
            let intensity = 0.75 + 0.25 * environment.solar_angle.sin().max(0.0);
            Self { sky, intensity }
        } else {
            Self {
                sky: NIGHT_SKY,
                intensity: 0.25 + 0.2 * environment.flicker,
            }
        }
    }

    pub fn shade(&self, color: Color) -> Color {
        Color::new(
            color.r * self.intensity,
            color.g * self.intensity,
            color.b * self.intensity,
            color.a,
        )
    }
}

/// One vertical precipitation segment at a fresh random spot. The drops are
/// visual jitter only and never feed back into the simulation.
pub fn precipitation_drop(rng: &mut fastrand::Rng) -> (Vec3, Vec3) {
    let x = -PRECIPITATION_SPREAD + 2.0 * PRECIPITATION_SPREAD * rng.f32();
    let y = DROP_MIN_HEIGHT + (DROP_MAX_HEIGHT - DROP_MIN_HEIGHT) * rng.f32();
    let z = -PRECIPITATION_SPREAD + 2.0 * PRECIPITATION_SPREAD * rng.f32();
    (vec3(x, y, z), vec3(x, y - DROP_LENGTH, z))
}

pub fn draw_precipitation(weather: Weather, rng: &mut fastrand::Rng) {
    let color = match weather {
        Weather::Rain => RAIN_COLOR,
        _ => SNOW_COLOR,
    };

    for _ in 0..PRECIPITATION_COUNT {
        let (top, bottom) = precipitation_drop(rng);
        draw_line_3d(top, bottom, color);
    }
}

/// Screen-space stand-in for fixed-function linear fog.
pub fn draw_fog_overlay() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), FOG_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_sky_follows_the_sun() {
        let mut environment = Environment::new();
        environment.solar_angle = 0.0;

        let dawn = Lighting::for_environment(&environment);
        assert!((dawn.sky.r - 0.8).abs() < 1e-5);
        assert!((dawn.sky.g - 0.7).abs() < 1e-5);
        assert_eq!(dawn.sky.b, 1.0);

        environment.solar_angle = std::f32::consts::FRAC_PI_2;
        let noon = Lighting::for_environment(&environment);
        assert!(noon.sky.r < dawn.sky.r);
        assert!(noon.sky.g > dawn.sky.g);
        assert!(noon.intensity > dawn.intensity);
    }

    #[test]
    fn night_sky_is_fixed_and_dim() {
        let mut environment = Environment::new();
        environment.day = false;
        environment.flicker = 0.7;

        let light = Lighting::for_environment(&environment);
        assert_eq!(light.sky, NIGHT_SKY);
        assert!(light.intensity < 0.5);

        environment.flicker = 0.99;
        let brighter = Lighting::for_environment(&environment);
        assert!(brighter.intensity > light.intensity);
    }

    #[test]
    fn shade_scales_rgb_and_keeps_alpha() {
        let light = Lighting {
            sky: NIGHT_SKY,
            intensity: 0.5,
        };
        let shaded = light.shade(Color::new(1.0, 0.8, 0.6, 0.9));
        assert!((shaded.r - 0.5).abs() < 1e-5);
        assert!((shaded.g - 0.4).abs() < 1e-5);
        assert!((shaded.b - 0.3).abs() < 1e-5);
        assert_eq!(shaded.a, 0.9);
    }

    #[test]
    fn drops_fall_within_the_documented_volume() {
        let mut rng = fastrand::Rng::with_seed(42);

        for _ in 0..500 {
            let (top, bottom) = precipitation_drop(&mut rng);
            assert!((-PRECIPITATION_SPREAD..PRECIPITATION_SPREAD).contains(&top.x));
            assert!((-PRECIPITATION_SPREAD..PRECIPITATION_SPREAD).contains(&top.z));
            assert!((DROP_MIN_HEIGHT..DROP_MAX_HEIGHT).contains(&top.y));
            assert_eq!(bottom.x, top.x);
            assert_eq!(bottom.z, top.z);
            assert!((top.y - bottom.y - DROP_LENGTH).abs() < 1e-5);
        }
    }
}
