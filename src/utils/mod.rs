//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - window/element lookup, page reload and console logging

pub mod dom;
