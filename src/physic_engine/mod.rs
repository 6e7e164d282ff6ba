pub mod r#trait;
pub use r#trait::{Entity, PhysicEngine, PhysicEngineIterator, StepEnv};

pub mod types;
pub use self::types::{UpdateResult, Viewport};

pub mod color;
pub use self::color::{Color, ColorTone};

pub mod particle_type;
pub use self::particle_type::ParticleType;

pub mod particle;
pub use self::particle::Particle;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod explosion;
pub use self::explosion::explode;

pub mod scheduler;
pub use self::scheduler::{ScheduledAction, Scheduler};

pub mod config;
pub use self::config::PhysicConfig;

pub mod physic_engine_fireworks;
pub use self::physic_engine_fireworks::PhysicEngineFireworks;
