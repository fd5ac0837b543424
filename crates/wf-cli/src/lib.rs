//! Wireframe Console
//!
//! Interactive command-line editor over [`wf_core::Controller`]:
//! - Console: prompted input and colored output over any reader/writer
//! - CommandRegistry: named commands with usage and description
//! - Views: main view (statistics, save) and the lines/faces editors

pub mod command;
pub mod console;
pub mod error;
pub mod palette;
pub mod views;

pub use command::*;
pub use console::*;
pub use error::*;
pub use palette::Palette;
pub use views::*;
