mod engine;
mod engine_config;
mod keyboard;
mod progress;
mod reconciler;
mod validation;

pub use engine::{PublicState, SliderEngine};
pub use engine_config::{Orientation, SliderEngineConfig};
pub use keyboard::KeyCommand;
pub use progress::ProgressStyle;
