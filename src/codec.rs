/// Escapes buffer content so it can sit inside a double-quoted protocol argument.
///
/// Backslashes are doubled before quotes are escaped, otherwise the backslash
/// added in front of each quote would be doubled again.
pub fn escape_for_transmission(text: &str) -> String {
	text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Turns the literal two-character marker `\n` into a real line break.
///
/// Nothing else is reversed: `\\` and `\"` survive as-is, and a backslash that
/// is not followed by `n` passes through unchanged.
pub fn unescape_from_wire(text: &str) -> String {
	text.replace("\\n", "\n")
}
