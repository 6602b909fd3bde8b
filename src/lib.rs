//! slider-rs: positioning and validation engine for multi-handle sliders.
//!
//! This crate provides the pure numeric core of a range slider: mapping
//! between domain values and track positions, ordering and boundary
//! validation across an arbitrary number of handles, keyboard stepping, and
//! snap-point quantization. Rendering, event wiring, and accessibility
//! markup stay with the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{
    KeyCommand, Orientation, ProgressStyle, PublicState, SliderEngine, SliderEngineConfig,
};
pub use error::{SliderError, SliderResult};
