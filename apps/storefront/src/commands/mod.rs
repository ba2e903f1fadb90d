//! # Command Layer
//!
//! The functions a UI shell binds to. Each command:
//!
//! 1. Logs its invocation at `debug!`
//! 2. Takes exactly the store objects it needs (no ambient state)
//! 3. Validates input, resolves ids, dispatches actions
//! 4. Returns a serializable DTO, or an [`ApiError`](crate::error::ApiError)
//!    for caller mistakes (unknown id, malformed input)
//!
//! Rejected mutations are not errors: an out-of-stock add or a duplicate
//! wishlist save pushes an error notice and returns the unchanged state,
//! exactly as the storefront UI expects.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod wishlist;
