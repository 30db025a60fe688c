//! Built-in patch recipes.
//!
//! A recipe is a [`crate::Pipeline`] with its anchors, markers, patterns and
//! replacements fixed at compile time.

pub mod whatsapp_toggle;

pub use whatsapp_toggle::whatsapp_toggle;
