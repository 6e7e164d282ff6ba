pub mod simulator;
pub use simulator::{Simulator, SimulatorHandle};
pub mod settings;
pub use settings::{SimulatorSettings, SimulatorSettingsBuilder};
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::{RasterSurface, RendererConfig, Surface};
// Input engine
pub mod input_engine;
pub use input_engine::InputEvent;
// Physic engine
pub mod physic_engine;
pub use physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineFireworks};

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
