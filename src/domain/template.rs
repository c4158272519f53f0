// src/domain/template.rs

use regex::{Captures, Regex};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::LazyLock;

// ASCII word characters only.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder regex"));

/// Replace every `{{name}}` in `template` with `vars[name]`.
///
/// - Names missing from `vars` become the empty string.
/// - Tokens that don't match `{{word}}` are left verbatim.
/// - Substituted values are not scanned again.
pub fn render<K, V>(template: &str, vars: &HashMap<K, V>) -> String
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1])
                .map(|v| v.as_ref().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
