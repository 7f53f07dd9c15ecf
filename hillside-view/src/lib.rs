use hillside_core::{FastRandom, Scene, SceneConfig, Viewpoint, Weather};
use macroquad::prelude::*;

use crate::atmosphere::Lighting;
use crate::walker::{WalkerDrawConfig, draw_walker};

mod atmosphere;
mod scenery;
mod walker;

const FIXED_STEP_SECONDS: f32 = 1.0 / 60.0;
const CONFIG_PATH: &str = "hillside.json";
const CAMERA_EYE_HEIGHT: f32 = 5.0;
const CAMERA_TARGET_HEIGHT: f32 = 2.0;

pub struct SceneApp {
    scene: Scene,
    rng: FastRandom,
    // Visual-only jitter (precipitation); simulation draws stay seedable.
    jitter_rng: fastrand::Rng,
    walker_draw: WalkerDrawConfig,
}

impl SceneApp {
    pub fn new(config: &SceneConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => FastRandom::with_seed(seed),
            None => FastRandom::new(),
        };
        let scene = Scene::new(config.walkers, &mut rng);

        Self {
            scene,
            rng,
            jitter_rng: fastrand::Rng::new(),
            walker_draw: WalkerDrawConfig::default(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn fixed_update(&mut self) {
        self.scene.step(&mut self.rng);
    }

    pub fn handle_input(&mut self) {
        if is_key_pressed(KeyCode::D) {
            self.scene.force_day();
        }
        if is_key_pressed(KeyCode::N) {
            self.scene.force_night();
        }
        if is_key_pressed(KeyCode::W) {
            self.scene.cycle_weather();
        }
        if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
            self.scene.zoom_in();
        }
        if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
            self.scene.zoom_out();
        }
        // Arrows repeat per frame while held, like key autorepeat.
        if is_key_down(KeyCode::Left) {
            self.scene.turn_left();
        }
        if is_key_down(KeyCode::Right) {
            self.scene.turn_right();
        }
    }

    pub fn render(&mut self) {
        let light = Lighting::for_environment(&self.scene.environment);
        clear_background(light.sky);

        set_camera(&orbit_camera(&self.scene.viewpoint));

        scenery::draw_ground(&light);
        scenery::draw_hills(&light);
        scenery::draw_cabin(&light);
        scenery::draw_trees(&light);
        scenery::draw_clouds(self.scene.environment.solar_angle, &light);
        scenery::draw_smoke(self.scene.environment.smoke_phase);

        for walker in self.scene.walkers() {
            draw_walker(walker, &self.walker_draw, &light);
        }

        if self.scene.weather.has_precipitation() {
            atmosphere::draw_precipitation(self.scene.weather, &mut self.jitter_rng);
        }

        set_default_camera();
        if self.scene.fog_active() {
            atmosphere::draw_fog_overlay();
        }
        self.draw_hud();
    }

    fn draw_hud(&self) {
        draw_text(&format!("tick: {}", self.scene.tick), 20.0, 40.0, 24.0, WHITE);

        let phase = if self.scene.environment.day {
            "day"
        } else {
            "night"
        };
        draw_text(&format!("time: {}", phase), 20.0, 64.0, 24.0, WHITE);

        draw_text(
            &format!("weather: {}", weather_label(self.scene.weather)),
            20.0,
            88.0,
            24.0,
            WHITE,
        );

        draw_text(
            &format!(
                "zoom: {:.0}  yaw: {:.0}",
                self.scene.viewpoint.zoom, self.scene.viewpoint.yaw
            ),
            20.0,
            112.0,
            24.0,
            WHITE,
        );
    }
}

fn weather_label(weather: Weather) -> &'static str {
    match weather {
        Weather::Clear => "clear",
        Weather::Rain => "rain",
        Weather::Snow => "snow",
        Weather::Fog => "fog",
    }
}

/// Eye position orbiting the scene center at the viewpoint's distance.
pub fn camera_eye(viewpoint: &Viewpoint) -> Vec3 {
    let distance = -viewpoint.zoom;
    let yaw = viewpoint.yaw.to_radians();
    vec3(distance * yaw.sin(), CAMERA_EYE_HEIGHT, distance * yaw.cos())
}

fn orbit_camera(viewpoint: &Viewpoint) -> Camera3D {
    Camera3D {
        position: camera_eye(viewpoint),
        target: vec3(0.0, CAMERA_TARGET_HEIGHT, 0.0),
        up: vec3(0.0, 1.0, 0.0),
        ..Default::default()
    }
}

pub fn load_config() -> SceneConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(text) => SceneConfig::from_json(&text)
            .unwrap_or_else(|err| panic!("failed to load {CONFIG_PATH}: {}", err.0)),
        Err(_) => SceneConfig::default(),
    }
}

pub async fn run() {
    let config = load_config();
    let mut app = SceneApp::new(&config);
    let mut accumulator = 0.0_f32;

    loop {
        // Consume real elapsed time in fixed-size simulation steps.
        accumulator += get_frame_time();
        while accumulator >= FIXED_STEP_SECONDS {
            app.fixed_update();
            accumulator -= FIXED_STEP_SECONDS;
        }

        app.handle_input();
        app.render();

        next_frame().await;
    }
}
