//! In-memory mock of the products API
//!
//! Serves the same contract the real collection resource exposes, with
//! per-route hit counters and last-request capture so client tests can
//! assert call counts and bodies. Also runs standalone as a dev server.

pub mod api;

pub use api::{MockCatalog, router, spawn};
