pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod graph_report;
pub mod json_output;
pub mod play;

pub use app::MovieMatchApp;
pub use args::{Args, Command};
