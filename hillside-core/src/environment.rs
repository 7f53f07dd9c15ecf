use std::f32::consts::PI;

use crate::random::RandomSource;

pub const SOLAR_STEP: f32 = 0.005;
pub const SMOKE_STEP: f32 = 0.01;

const FLICKER_MIN: f32 = 0.7;
const FLICKER_MAX: f32 = 1.0;

/// Solar clock plus the ambient animation phases that ride on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    /// Radians; climbs through [0, PI] by day and falls back by night.
    pub solar_angle: f32,
    pub day: bool,
    /// Night-light intensity, resampled every tick in [0.7, 1.0).
    pub flicker: f32,
    /// Unbounded; the renderer wraps it modulo 2.0.
    pub smoke_phase: f32,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            solar_angle: 0.0,
            day: true,
            flicker: 0.8,
            smoke_phase: 0.0,
        }
    }

    pub fn tick(&mut self, rng: &mut dyn RandomSource) {
        if self.day {
            self.solar_angle += SOLAR_STEP;
            // The angle is not reset at the crossover; the overshoot is
            // where the night leg starts descending from.
            if self.solar_angle >= PI {
                self.day = false;
            }
        } else {
            self.solar_angle -= SOLAR_STEP;
            if self.solar_angle <= 0.0 {
                self.day = true;
            }
        }

        self.flicker = rng.uniform_f32(FLICKER_MIN, FLICKER_MAX);
        self.smoke_phase += SMOKE_STEP;
    }

    /// Immediate override from the keyboard; leaves solar_angle alone.
    pub fn force_day(&mut self) {
        self.day = true;
    }

    pub fn force_night(&mut self) {
        self.day = false;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FastRandom;

    #[test]
    fn day_flips_to_night_at_the_apex_without_reset() {
        let mut environment = Environment::new();
        environment.solar_angle = 3.14;

        let mut rng = FastRandom::with_seed(1);
        environment.tick(&mut rng);

        assert!(!environment.day);
        assert!((environment.solar_angle - 3.145).abs() < 1e-5);

        // The next tick descends from the overshoot value.
        environment.tick(&mut rng);
        assert!((environment.solar_angle - 3.14).abs() < 1e-5);
        assert!(!environment.day);
    }

    #[test]
    fn night_flips_to_day_at_zero() {
        let mut environment = Environment::new();
        environment.day = false;
        environment.solar_angle = 0.004;

        let mut rng = FastRandom::with_seed(1);
        environment.tick(&mut rng);

        assert!(environment.day);
        assert!(environment.solar_angle <= 0.0);

        environment.tick(&mut rng);
        assert!(environment.day);
        assert!(environment.solar_angle > -0.002);
    }

    #[test]
    fn forcing_day_never_touches_the_solar_angle() {
        let mut environment = Environment::new();
        environment.day = false;
        environment.solar_angle = 1.0;

        environment.force_day();
        assert!(environment.day);
        assert_eq!(environment.solar_angle, 1.0);

        environment.force_day();
        assert_eq!(environment.solar_angle, 1.0);

        environment.force_night();
        assert!(!environment.day);
        assert_eq!(environment.solar_angle, 1.0);
    }

    #[test]
    fn flicker_resamples_in_range_every_tick() {
        let mut environment = Environment::new();
        let mut rng = FastRandom::with_seed(3);

        for _ in 0..500 {
            environment.tick(&mut rng);
            assert!((0.7..1.0).contains(&environment.flicker));
        }
    }

    #[test]
    fn smoke_phase_climbs_without_bound() {
        let mut environment = Environment::new();
        let mut rng = FastRandom::with_seed(4);

        let mut previous = environment.smoke_phase;
        for _ in 0..300 {
            environment.tick(&mut rng);
            assert!(environment.smoke_phase > previous);
            previous = environment.smoke_phase;
        }
        assert!(environment.smoke_phase > 2.0);
    }

    #[test]
    fn day_flag_tracks_solar_direction() {
        let mut environment = Environment::new();
        let mut rng = FastRandom::with_seed(5);

        let mut previous = environment.solar_angle;
        for _ in 0..2000 {
            let was_day = environment.day;
            environment.tick(&mut rng);
            if was_day {
                assert!(environment.solar_angle > previous);
            } else {
                assert!(environment.solar_angle < previous);
            }
            previous = environment.solar_angle;
        }
    }
}
