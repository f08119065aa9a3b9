//! Indentation normalizer for inline text templates.
//!
//! Templates are usually written as string literals nested inside indented
//! code. [`deindent`] takes the indentation of the first content line as the
//! reference and strips one copy of it from the start of every line, so the
//! output is left-aligned while relative indentation survives.

use regex::Regex;
use std::fmt::Display;

use crate::error::{Error, Result};

/// Removes the indentation of the first content line from every line of `text`.
///
/// # Examples
/// ```
/// use ts_wp_init::deindent::deindent;
///
/// let html = deindent("\n    <div>\n      <span>x</span>\n    </div>\n");
/// assert_eq!(html, "\n<div>\n  <span>x</span>\n</div>\n");
/// ```
pub fn deindent(text: &str) -> String {
    let Some(indent) = get_indent(text) else {
        return text.to_string();
    };
    if indent.is_empty() {
        return text.to_string();
    }

    // `R` makes `^` match after `\r` as well as `\n`.
    match Regex::new(&format!("(?mR)^{}", regex::escape(indent))) {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(e) => {
            log::warn!("Cannot build indentation pattern: {e}");
            text.to_string()
        }
    }
}

/// Finds the reference indentation of `text`.
///
/// Returns `None` when `text` holds no content at all, or when no `\n`
/// precedes the first content.
fn get_indent(text: &str) -> Option<&str> {
    let first_non_ws = text.find(|c: char| !c.is_whitespace())?;
    let last_nl = text[..first_non_ws].rfind('\n')?;

    // skip over \r and \n
    Some(text[last_nl..first_non_ws].trim_start_matches(['\r', '\n']))
}

/// A text blueprint assembled from literal fragments and substitution values.
///
/// The fragments are interleaved with the values:
/// `fragment[0] + value[0] + fragment[1] + ... + fragment[n]`.
#[derive(Debug, Clone)]
pub struct Template<'a> {
    fragments: &'a [&'a str],
    values: Vec<String>,
}

impl<'a> Template<'a> {
    pub fn new(fragments: &'a [&'a str]) -> Self {
        Self { fragments, values: Vec::with_capacity(fragments.len().saturating_sub(1)) }
    }

    /// Appends a value rendered through its `Display` implementation.
    pub fn value<T: Display + ?Sized>(mut self, value: &T) -> Self {
        self.values.push(value.to_string());
        self
    }

    /// Appends a value rendered by a caller-supplied function.
    pub fn value_with<T: ?Sized, F>(mut self, value: &T, render: F) -> Self
    where
        F: FnOnce(&T) -> String,
    {
        self.values.push(render(value));
        self
    }

    /// Interleaves fragments and values.
    ///
    /// Fails unless there is exactly one more fragment than values.
    pub fn assemble(&self) -> Result<String> {
        let expected = self.fragments.len().saturating_sub(1);
        if self.fragments.is_empty() || self.values.len() != expected {
            return Err(Error::TemplateArityError { expected, actual: self.values.len() });
        }

        let mut out = String::from(self.fragments[0]);
        for (value, fragment) in self.values.iter().zip(&self.fragments[1..]) {
            out.push_str(value);
            out.push_str(fragment);
        }
        Ok(out)
    }

    /// Assembles the template and normalizes its indentation.
    pub fn deindent(&self) -> Result<String> {
        self.assemble().map(|text| deindent(&text))
    }
}

/// `format!` followed by [`deindent`].
///
/// ```
/// use ts_wp_init::deindent;
///
/// let name = "app";
/// let out = deindent!("
///     <div id=\"{name}\">
///       hi
///     </div>");
/// assert_eq!(out, "\n<div id=\"app\">\n  hi\n</div>");
/// ```
#[macro_export]
macro_rules! deindent {
    ($($arg:tt)*) => {
        $crate::deindent::deindent(&format!($($arg)*))
    };
}
