//! Markup text whitespace normalization.
//!
//! Text children are normalized using the following rules, applied in this
//! order:
//! - strip a leading run of newlines and the spaces following them;
//! - strip a trailing run of newlines and the spaces following them;
//! - collapse every interior run of newlines (with trailing spaces) into a
//!   single space.
//!
//! The order matters: collapsing before stripping would turn significant
//! leading whitespace into a space instead of removing it.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_WS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n* *").unwrap());

static TRAILING_WS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n* *$").unwrap());

static INTERIOR_WS_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+ *").unwrap());

/// Normalize one text child the way whitespace-insignificant markup is
/// conventionally rendered.
pub fn normalize_jsx_text(value: &str) -> String {
    let value = LEADING_WS_REGEXP.replace(value, "");
    let value = TRAILING_WS_REGEXP.replace(&value, "");
    INTERIOR_WS_REGEXP.replace_all(&value, " ").into_owned()
}
