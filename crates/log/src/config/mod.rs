//! Configuration types
//!
//! - `base`: core configuration (`Config`, `Format`)
//! - `display`: writer and display options
//! - `presets`: development, production and test setups plus `from_env`

mod base;
mod display;
mod presets;

pub use base::{Config, Format};
pub use display::{DisplayConfig, Writer};
