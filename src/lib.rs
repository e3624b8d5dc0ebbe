//! Adghal AI — environmental assistant chat routing service.
//!
//! The binary in `main.rs` wires configuration, backends and the HTTP
//! surface together; everything it uses lives in these modules.

pub mod assistant;
pub mod config;
pub mod llm;
pub mod resources;
pub mod routes;
pub mod search;
pub mod state;
