pub mod demo;

pub use demo::{Demo, DemoReport, OutputFormat};
