//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns who the visitor is; `callback` owns the one-shot code
//! exchange. Neither touches the DOM directly.

pub mod callback;
pub mod session;
