//! Language id lookup for display

/// Map a file name to the language id used for highlighting.
///
/// Looks at the text after the last `.`, case-insensitively. Unknown or
/// missing extensions map to `typescript`.
pub fn language_for(file_name: &str) -> &'static str {
    let extension = file_name.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "js" => "javascript",
        "ts" => "typescript",
        "md" => "markdown",
        _ => "typescript",
    }
}
