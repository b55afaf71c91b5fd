use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.+?>").expect("tag pattern is valid"));

/// Removes every `<...>` span (shortest match, single pass). Everything
/// outside the spans is kept byte for byte.
pub fn strip_markup(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}
