//! Progress reporting boundary.
//!
//! The codec reports `(processed, total)` after every unit of work. Reporting
//! is fire-and-forget: a sink must never block or fail the codec's result.

/// Receives progress notifications from the encoder and decoder.
pub trait ProgressSink {
    fn report(&self, processed: usize, total: usize);
}

/// Sink that discards all reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _processed: usize, _total: usize) {}
}

impl<F: Fn(usize, usize)> ProgressSink for F {
    fn report(&self, processed: usize, total: usize) {
        self(processed, total)
    }
}
