//! ES module exporting a token object.

use std::fmt::Write;

use crate::error::Result;
use crate::types::{format_number, LineHeight, Token, TokenCollection};

use super::naming::{comment_text, compact_key, UniqueNames};
use super::{ExportOptions, Exporter};

pub struct JsExporter;

/// Quote a string as a JS literal.
fn string_literal(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Turn a namespace into a usable binding name.
fn identifier(name: &str) -> String {
    let mut ident: String = name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    if ident.is_empty() {
        return "tokens".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

fn keyed<T: Token>(tokens: &[T]) -> Vec<(&T, String)> {
    let mut keys = UniqueNames::new("");
    tokens
        .iter()
        .map(|t| (t, keys.claim(compact_key(t.name()))))
        .collect()
}

fn write_group(
    out: &mut String,
    title: &str,
    group: &str,
    entries: Vec<(String, String)>,
    comments: bool,
) -> std::fmt::Result {
    if comments {
        writeln!(out, "  // {}", title)?;
    }
    if entries.is_empty() {
        return writeln!(out, "  {}: {{}},", group);
    }
    writeln!(out, "  {}: {{", group)?;
    for (key, value) in entries {
        writeln!(out, "    {}: {},", string_literal(&key), value)?;
    }
    writeln!(out, "  }},")
}

impl Exporter for JsExporter {
    fn render(
        &self,
        tokens: &TokenCollection,
        options: &ExportOptions,
        out: &mut String,
    ) -> Result<()> {
        let comments = options.include_comments;
        if comments {
            writeln!(out, "// Design tokens: {}", comment_text(&tokens.metadata().source_name))?;
        }

        let binding = options.namespace().map(identifier).unwrap_or_else(|| "tokens".to_string());
        writeln!(out, "export const {} = {{", binding)?;

        let colors = keyed(tokens.colors())
            .into_iter()
            .map(|(c, key)| (key, string_literal(&c.value)))
            .collect();
        write_group(out, "Colors", "colors", colors, comments)?;

        let typography = keyed(tokens.typography())
            .into_iter()
            .map(|(t, key)| {
                let line_height = match t.line_height {
                    LineHeight::Px(_) => string_literal(&t.line_height.to_string()),
                    LineHeight::Multiplier(m) => format_number(m),
                };
                let value = format!(
                    "{{ fontFamily: {}, fontSize: {}, lineHeight: {}, fontWeight: {} }}",
                    string_literal(&t.font_family),
                    format_number(t.font_size),
                    line_height,
                    t.font_weight
                );
                (key, value)
            })
            .collect();
        write_group(out, "Typography", "typography", typography, comments)?;

        let spacing = keyed(tokens.spacing())
            .into_iter()
            .map(|(s, key)| (key, format_number(s.value)))
            .collect();
        write_group(out, "Spacing", "spacing", spacing, comments)?;

        writeln!(out, "}};")?;
        Ok(())
    }
}
