//! Networking modules for the identity hub.
//!
//! SYSTEM CONTEXT
//! ==============
//! `hub` performs the REST calls and `types` defines the hub's JSON schema.

pub mod hub;
pub mod types;
