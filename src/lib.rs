pub mod calculator;
pub mod config;
pub mod convert;
pub mod expr;
pub mod history;
pub mod tax;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::convert;
pub use expr::{evaluate, preview, EvalResult};
pub use tax::{compute_gst, GstComputation, GstMode};
