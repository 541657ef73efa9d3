//! Value formatting shared by every dialect.

use action_words::{is_numeric_literal, is_test_case_reference};

use crate::writer::Dialect;

/// Render a bound step value.
///
/// Empty values render as `""`, numeric literals bare, and any other free
/// value in double quotes. Test-case references are handed to the dialect.
///
/// # Examples
/// ```
/// use keyword_scripts::{Cucumber, Robot, format_value};
///
/// assert_eq!(format_value(&Cucumber, "admin", false), "\"admin\"");
/// assert_eq!(format_value(&Cucumber, "12", false), "12");
/// assert_eq!(format_value(&Cucumber, "<user>", true), "&lt;user&gt;");
/// assert_eq!(format_value(&Robot::default(), "<user>", false), "${user}");
/// ```
#[must_use]
pub fn format_value<D: Dialect + ?Sized>(dialect: &D, value: &str, escape_arrows: bool) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    if is_test_case_reference(value) {
        return dialect.render_reference(value, escape_arrows);
    }
    if is_numeric_literal(value) {
        return value.to_string();
    }
    quote(value)
}

/// Render one dataset value for an example table.
///
/// The value is trimmed, then rendered bare when numeric and quoted
/// otherwise.
///
/// # Examples
/// ```
/// use keyword_scripts::format_cell;
///
/// assert_eq!(format_cell(" 5 "), "5");
/// assert_eq!(format_cell(" smith"), "\"smith\"");
/// assert_eq!(format_cell("  "), "\"\"");
/// ```
#[must_use]
pub fn format_cell(value: &str) -> String {
    let trimmed = value.trim();
    if is_numeric_literal(trimmed) {
        trimmed.to_string()
    } else {
        quote(trimmed)
    }
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
