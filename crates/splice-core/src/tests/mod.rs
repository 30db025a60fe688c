//! Crate-level tests for splice-core.

/// Excerpt of the order details component in its unpatched shape.
const ORDER_HISTORY: &str = include_str!("../../tests/fixtures/order_history.tsx");

/// The same excerpt as earlier runs of the toggle patch left it.
const ORDER_HISTORY_PATCHED: &str =
    include_str!("../../tests/fixtures/order_history.patched.tsx");
