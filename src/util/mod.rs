//! Utility helpers shared across the gate's components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and decision logic from component
//! code so both can be tested natively.

pub mod guard;
pub mod messages;
pub mod storage;
