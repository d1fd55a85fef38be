//! Application-level orchestration.
//!
//! Owns the single name registry and turns front-end actions into outcomes,
//! re-sorting after every successful mutation. UI/CLI layers call into this
//! module so the registry never depends on a presentation layer.

mod session;

pub(crate) use session::Session;
