use std::sync::OnceLock;

use regex::Regex;

static NON_WORD: OnceLock<Regex> = OnceLock::new();

/// Maps an arbitrary entity identifier to a token safe for structural keys.
///
/// Every maximal run of characters outside `[A-Za-z0-9_]` collapses to a
/// single underscore. The function is total and idempotent.
#[must_use]
pub fn sanitize(identifier: &str) -> String {
    let pattern = NON_WORD.get_or_init(|| Regex::new("[^A-Za-z0-9_]+").expect("static pattern"));
    pattern.replace_all(identifier, "_").into_owned()
}
