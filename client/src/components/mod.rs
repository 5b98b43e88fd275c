//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the carousel and celebration chrome while reading page
//! content from the Leptos context provided by `App`.

pub mod carousel;
pub mod celebration;
pub mod floating_hearts;
