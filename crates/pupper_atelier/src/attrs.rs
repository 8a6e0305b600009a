//! Attribute binding classification.
//!
//! Pug marks every attribute whose value is a JavaScript expression with
//! `mustEscape`. Vue needs the same distinction spelled in the attribute
//! name instead, so each such attribute is turned into one of:
//!
//! - `v-bind:class="{...}"` for object-literal classes
//! - `v-on:event="..."` / `@event="..."` for event handlers
//! - `:name="..."` for any other expression
//!
//! This is a heuristic: the `mustEscape` flag set by the parser is trusted
//! as the signal that a value is an expression, and quote-wrapped values are
//! treated as literals.

use once_cell::sync::Lazy;
use pupper_carton::{is_quote_wrapped, String};
use pupper_relief::{AttrValue, Attribute};
use regex::Regex;

use crate::directive::V_BIND_CLASS;
use crate::escape::escape;

/// Object literal spanning the whole value, newlines included.
static OBJECT_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A\{.*\}\z").expect("Invalid regex"));

/// Rewrite every attribute of a node, preserving order and length.
pub fn rewrite_attributes(attrs: Vec<Attribute>) -> Vec<Attribute> {
    attrs.into_iter().map(rewrite_attribute).collect()
}

/// Rewrite one attribute into its Vue binding form.
///
/// Attributes that are already literals (`must_escape == false`) or boolean
/// are returned unchanged, which makes the rewrite idempotent.
pub fn rewrite_attribute(attr: Attribute) -> Attribute {
    let Attribute {
        name,
        val,
        must_escape,
    } = attr;

    let value = match val {
        AttrValue::Str(value) if must_escape => value,
        val => {
            return Attribute {
                name,
                val,
                must_escape,
            }
        }
    };

    let name: String = if name == "class" && OBJECT_LITERAL.is_match(&value) {
        V_BIND_CLASS.into()
    } else if let Some(event) = name.strip_prefix("on:") {
        format!("v-on:{}", event).into()
    } else if let Some(event) = name.strip_prefix('@') {
        format!("@{}", event).into()
    } else if !is_quote_wrapped(&value) {
        format!(":{}", name).into()
    } else {
        return Attribute::new(name, value, must_escape);
    };

    tracing::trace!(binding = %name, "rewrote attribute binding");
    Attribute::new(name, escape(&value), false)
}
