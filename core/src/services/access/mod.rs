//! Board access control for school-scoped boards

mod gate;
mod service;

#[cfg(test)]
mod tests;

pub use gate::{AccessDecision, AccessGate, DenialReason, Viewer};
pub use service::AccessService;
