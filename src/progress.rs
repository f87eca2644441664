// src/progress.rs
//! Status callbacks from [`crate::scrape::run`] to whatever front end drives it.

/// Every method has a no-op default; implement only what you display.
pub trait Progress {
    /// Pages the run is going to request.
    fn begin(&mut self, _total: usize) {}

    /// Human-readable status line.
    fn log(&mut self, _msg: &str) {}

    /// Card `number` was assembled as `name`.
    fn item_done(&mut self, _number: u32, _name: &str) {}

    /// Page `number` was skipped (fetch error or no usable card number).
    fn item_failed(&mut self, _number: u32) {}

    /// Run over, including early exits.
    fn finish(&mut self) {}
}

/// Sink that ignores everything.
pub struct NullProgress;

impl Progress for NullProgress {}
