//! Shared reactive state provided via Leptos context, plus page-local state
//! structs.
//!
//! ARCHITECTURE
//! ============
//! `session` and `toasts` are provided once at the composition root
//! (`app::App`); the remaining modules are plain structs owned by the page
//! that renders them, with their pure transition helpers carrying the unit
//! tests.

pub mod catalog;
pub mod downloads;
pub mod session;
pub mod toasts;
pub mod whatsapp;
