//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod layout;
pub mod price_dialog;
pub mod product_card;
pub mod toast_stack;
