use crate::environment::Environment;
use crate::random::RandomSource;
use crate::viewpoint::Viewpoint;
use crate::walker::Walker;
use crate::weather::Weather;

/// The whole simulation state. One writer, one reader, no hidden globals.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub tick: u64,
    pub environment: Environment,
    pub weather: Weather,
    pub viewpoint: Viewpoint,
    walkers: Vec<Walker>,
}

impl Scene {
    /// Spawns the fixed walker population. The collection never grows or
    /// shrinks after this.
    pub fn new(walker_count: usize, rng: &mut dyn RandomSource) -> Self {
        let walkers = (0..walker_count).map(|_| Walker::spawn(rng)).collect();
        Self {
            tick: 0,
            environment: Environment::new(),
            weather: Weather::default(),
            viewpoint: Viewpoint::new(),
            walkers,
        }
    }

    /// One frame tick: clock first, then every walker in index order.
    pub fn step(&mut self, rng: &mut dyn RandomSource) {
        self.tick += 1;
        self.environment.tick(rng);
        for walker in &mut self.walkers {
            walker.advance(rng);
        }
    }

    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    pub fn fog_active(&self) -> bool {
        self.weather.is_fog()
    }

    pub fn cycle_weather(&mut self) {
        self.weather = self.weather.cycled();
    }

    pub fn force_day(&mut self) {
        self.environment.force_day();
    }

    pub fn force_night(&mut self) {
        self.environment.force_night();
    }

    pub fn zoom_in(&mut self) {
        self.viewpoint.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewpoint.zoom_out();
    }

    pub fn turn_left(&mut self) {
        self.viewpoint.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.viewpoint.turn_right();
    }
}
