//! Static grid map viewer.
//!
//! Map files are plain text:
//!
//! ```text
//! <width> <height>
//! <robot count>
//! <x> <y>          one line per robot start
//! <x> <y>          goal
//! 0010...          grid rows, '0' free and '1' obstacle
//! ```
//!
//! Coordinates in the file have their origin at the bottom-left; they are flipped
//! to screen orientation when loaded.

pub mod config;
pub mod error;
pub mod grid;
pub mod map;
pub mod palette;
pub mod path;
pub mod render;

pub use config::Config;
pub use error::MapError;
pub use grid::{Cell, Grid};
pub use map::Map;
pub use path::PathNode;
