//! Reusable auth UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_guard` wraps protected routes; the two screens are the guard's
//! presentational states.

pub mod access_denied;
pub mod auth_guard;
pub mod loading_screen;
