//! Platform abstraction layer
//!
//! Only the browser needs glue; native runs are driven directly through
//! `driver::Loop` with a `ManualScheduler`.

#[cfg(target_arch = "wasm32")]
pub mod web;
