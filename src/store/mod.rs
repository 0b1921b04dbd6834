//! Product Store subsystem
//!
//! Owns the client-side state `{ products, loading, error }` and the four
//! operations that mutate it. Every value entering `products` has passed
//! the schema validator; every failure is folded into the `error` field
//! instead of propagating to callers.

mod state;

pub use state::ProductStore;
