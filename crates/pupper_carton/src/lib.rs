//! Carton - The shared toolbox for pupper.
//!
//! Holds the small utilities every other pupper crate reaches for:
//!
//! - **String**: `CompactString`, used for every name and value in the AST
//! - **Quotes**: detecting and decoding JavaScript string literals
//! - **DOM tag config**: the void element and doctype tables used when rendering markup
//!
//! # Example
//!
//! ```
//! use pupper_carton::{is_quote_wrapped, unquote_js_string, String};
//!
//! let value = String::from("'primary'");
//! assert!(is_quote_wrapped(&value));
//! assert_eq!(unquote_js_string(&value).as_deref(), Some("primary"));
//! ```

pub mod dom_tag_config;
pub mod general;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export shared utilities
pub use dom_tag_config::*;
pub use general::*;
