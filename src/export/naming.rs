//! Identifier derivation shared by the exporters.

use std::collections::HashSet;

/// Lowercase a name into a hyphenated identifier.
///
/// Runs of anything other than letters and digits become one hyphen, and
/// leading or trailing hyphens are dropped. A name with nothing left
/// becomes `token`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if out.is_empty() {
        "token".to_string()
    } else {
        out
    }
}

/// Lowercased name with whitespace removed, used for JS object keys.
pub fn compact_key(name: &str) -> String {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if key.is_empty() {
        "token".to_string()
    } else {
        key
    }
}

/// Make arbitrary text safe inside a one-line `/* */` or `//` comment.
///
/// Control characters, line breaks included, become single spaces and `*/`
/// is split so it cannot close a block comment.
pub fn comment_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let c = if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') {
            ' '
        } else {
            c
        };
        if c == ' ' && out.ends_with(' ') {
            continue;
        }
        if c == '/' && out.ends_with('*') {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// `{prefix}-{category}-{slug}`, or `{category}-{slug}` without a prefix.
pub fn var_name(prefix: Option<&str>, category: &str, slug: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}-{}-{}", self::slug(prefix), category, slug),
        None => format!("{}-{}", category, slug),
    }
}

/// Hands out names that are unique within one scope.
///
/// The first claim of a name gets it unchanged; later claims get a numeric
/// suffix starting at 2.
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
    separator: &'static str,
}

impl UniqueNames {
    pub fn new(separator: &'static str) -> Self {
        Self {
            taken: HashSet::new(),
            separator,
        }
    }

    pub fn claim(&mut self, base: String) -> String {
        if self.taken.insert(base.clone()) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}{}{}", base, self.separator, n);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
