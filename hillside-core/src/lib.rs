pub mod config;
pub mod environment;
pub mod random;
pub mod scene;
pub mod viewpoint;
pub mod walker;
pub mod weather;

pub use config::{ConfigError, SceneConfig};
pub use environment::Environment;
pub use random::{FastRandom, RandomSource, ScriptedRandom};
pub use scene::Scene;
pub use viewpoint::Viewpoint;
pub use walker::{Behavior, WALKER_COUNT, WANDER_LIMIT, Walker};
pub use weather::Weather;
