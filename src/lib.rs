//! Bogosort, visualized: shuffle an array until it happens to be sorted,
//! drawing it as vertical bars with live throughput statistics.

pub mod app;
pub mod config;
pub mod error;
pub mod listener;
pub mod render;
pub mod screen;
pub mod sequence;
pub mod stats;
pub mod surface;
pub mod terminal;

pub use app::{run, Session, State};
pub use config::{Config, Theme};
pub use error::Error;
pub use listener::Signal;
pub use render::{Frame, Present, Renderer};
