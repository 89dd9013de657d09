//! Background tasks spawned outside the request/response cycle.
//!
//! Each submodule provides an async function intended to be dispatched via
//! `tokio::spawn`. Failures inside a task are recorded on the owning
//! record and logged; they never propagate back to a request handler.

pub mod generation;
