use crate::random::RandomSource;

pub const WALKER_COUNT: usize = 5;

/// Walkers turn around once x or z leaves [-WANDER_LIMIT, WANDER_LIMIT].
pub const WANDER_LIMIT: f32 = 20.0;
/// Spawn positions are drawn from the tighter [-SPAWN_EXTENT, SPAWN_EXTENT).
pub const SPAWN_EXTENT: f32 = 15.0;

const MIN_SPEED: f32 = 0.02;
const MAX_SPEED: f32 = 0.07;
const LEG_SWING_LIMIT: f32 = 15.0;
const LEG_SWING_STEP: f32 = 2.0;
const STAND_TICKS_BASE: i32 = 100;
const WALK_TICKS_BASE: i32 = 200;
const TURN_CHANCE_PERCENT: i32 = 2;
const TURN_EXTENT_DEGREES: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Standing,
    Walking,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walker {
    pub x: f32,
    pub z: f32,
    /// Facing in degrees, clockwise from +z. Never wrapped; only sin/cos
    /// consume it.
    pub angle: f32,
    pub speed: f32,
    pub behavior: Behavior,
    pub timer: i32,
    pub leg_angle: f32,
    pub leg_direction: f32,
}

impl Walker {
    pub fn spawn(rng: &mut dyn RandomSource) -> Self {
        Self {
            x: rng.uniform_f32(-SPAWN_EXTENT, SPAWN_EXTENT),
            z: rng.uniform_f32(-SPAWN_EXTENT, SPAWN_EXTENT),
            angle: rng.uniform_f32(0.0, 360.0),
            speed: rng.uniform_f32(MIN_SPEED, MAX_SPEED),
            behavior: if rng.uniform_i32(0, 2) == 0 {
                Behavior::Standing
            } else {
                Behavior::Walking
            },
            timer: rng.uniform_i32(0, STAND_TICKS_BASE),
            leg_angle: 0.0,
            leg_direction: 1.0,
        }
    }

    /// Advances one simulation tick. The stand/walk thresholds are drawn
    /// fresh every tick rather than latched at transition time.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) {
        self.timer += 1;

        match self.behavior {
            Behavior::Standing => {
                if self.timer > STAND_TICKS_BASE + rng.uniform_i32(0, STAND_TICKS_BASE) {
                    self.behavior = Behavior::Walking;
                    self.angle = rng.uniform_f32(0.0, 360.0);
                    self.timer = 0;
                }
            }
            Behavior::Walking => {
                self.swing_legs();

                let heading = self.angle.to_radians();
                self.x += heading.sin() * self.speed;
                self.z += heading.cos() * self.speed;

                if rng.uniform_i32(0, 100) < TURN_CHANCE_PERCENT {
                    self.angle += rng.uniform_f32(-TURN_EXTENT_DEGREES, TURN_EXTENT_DEGREES);
                }

                if self.x < -WANDER_LIMIT
                    || self.x > WANDER_LIMIT
                    || self.z < -WANDER_LIMIT
                    || self.z > WANDER_LIMIT
                {
                    // Reversal, not a reflection off the boundary normal.
                    self.angle += 180.0;
                }

                if self.timer > WALK_TICKS_BASE + rng.uniform_i32(0, WALK_TICKS_BASE) {
                    self.behavior = Behavior::Standing;
                    self.timer = 0;
                    // leg_direction keeps its last sign across the stop.
                    self.leg_angle = 0.0;
                }
            }
        }
    }

    /// Triangle-wave leg swing. The angle may overshoot the limit by one
    /// step before the direction flips.
    fn swing_legs(&mut self) {
        self.leg_angle += self.leg_direction * LEG_SWING_STEP;
        if self.leg_angle.abs() > LEG_SWING_LIMIT {
            self.leg_direction = -self.leg_direction;
        }
    }
}
