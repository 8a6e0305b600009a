//! Vue directive attribute names and constructors.

use pupper_carton::String;
use pupper_relief::Attribute;

pub const V_IF: &str = "v-if";
pub const V_ELSE_IF: &str = "v-else-if";
pub const V_ELSE: &str = "v-else";
pub const V_FOR: &str = "v-for";
pub const KEY: &str = ":key";
pub const V_BIND_CLASS: &str = "v-bind:class";

/// Name of the synthetic wrapper used when a directive cannot sit on a child.
pub const TEMPLATE_TAG: &str = "template";

/// A directive whose value is already a Vue literal.
pub fn directive(name: &str, value: String) -> Attribute {
    Attribute::new(name, value, false)
}
