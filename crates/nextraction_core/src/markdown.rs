use std::sync::LazyLock;

use regex::Regex;

use crate::html::escape_html;

/// Substitutions applied in order to already-escaped text. Line-anchored
/// rules run before newlines are turned into `<br>`.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*(.*?)\*\*", "<strong>$1</strong>"),
        (r"\*(.*?)\*", "<em>$1</em>"),
        (r"(?m)^### (.*)$", "<h4>$1</h4>"),
        (r"(?m)^## (.*)$", "<h3>$1</h3>"),
        (r"(?m)^# (.*)$", "<h2>$1</h2>"),
        (r"(?m)^- (.*)$", "• $1"),
        (r"(?m)^(\d+)\.[ \t]+(.*)$", "$1. $2"),
        (r"\r?\n", "<br>"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| {
        Regex::new(pattern).ok().map(|regex| (regex, replacement))
    })
    .collect()
});

/// Renders assistant text as a small HTML fragment.
///
/// The input is HTML-escaped first, so model output can never introduce
/// markup of its own; only the tags produced by the substitutions appear.
pub fn format_assistant_text(text: &str) -> String {
    let mut formatted = escape_html(text);
    for (regex, replacement) in RULES.iter() {
        formatted = regex.replace_all(&formatted, *replacement).into_owned();
    }
    formatted
}
