//! Command-line front end for building isocline payloads from exploration
//! result files.

pub mod input;
pub mod logging;
pub mod run;
pub mod util;

pub use logging::init_logging;
pub use run::{OutputKind, render};
