//! Built-in rules

mod arrow_body;
mod side_effect;

pub use arrow_body::{ArrowBodyOptions, ArrowBodyRule, BodyScope, BodyStyle};
pub use side_effect::{AllowTraps, SideEffectOptions, SideEffectRule};

use crate::rule::Rule;
use serde::de::DeserializeOwned;

/// Discarding a side-effect-free value with `void`
pub const SIDE_EFFECT: &str = "side-effect";

/// Preferred arrow function body shape
pub const ARROW_BODY: &str = "arrow-body";

/// IDs of every built-in rule
pub const BUILTIN_RULES: &[&str] = &[SIDE_EFFECT, ARROW_BODY];

/// Instantiate a built-in rule with its raw options
///
/// Returns `Ok(None)` for an unknown rule ID.
pub fn create_rule(
    id: &str,
    options: Option<&serde_json::Value>,
) -> Result<Option<Box<dyn Rule>>, serde_json::Error> {
    let rule: Box<dyn Rule> = match id {
        SIDE_EFFECT => Box::new(SideEffectRule::new(parse_options(options)?)),
        ARROW_BODY => Box::new(ArrowBodyRule::new(parse_options(options)?)),
        _ => return Ok(None),
    };
    Ok(Some(rule))
}

/// Absent or `null` options mean defaults
fn parse_options<T>(options: Option<&serde_json::Value>) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    match options {
        Some(value) if !value.is_null() => serde_json::from_value(value.clone()),
        _ => Ok(T::default()),
    }
}
