//! Quoting helpers for the build command handed to the platform shell

/// Escapes `text` for use inside a double-quoted POSIX shell word
///
/// Backslash, `"`, `$` and backtick are the only characters with special
/// meaning between double quotes.
///
/// # Examples
///
/// ```
/// use xcode_compdb::utils::quote_for_double_quotes;
///
/// assert_eq!(quote_for_double_quotes("/tmp/my build"), "/tmp/my build");
/// assert_eq!(quote_for_double_quotes("/tmp/$HOME"), "/tmp/\\$HOME");
/// ```
pub fn quote_for_double_quotes(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}
