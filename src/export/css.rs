//! CSS custom properties.

use std::fmt::Write;

use crate::error::Result;
use crate::types::{format_number, Token, TokenCategory, TokenCollection, TypographyToken};

use super::naming::{comment_text, slug, var_name, UniqueNames};
use super::{ExportOptions, Exporter};

/// A titled run of `(name, value)` variables.
pub(super) struct Section {
    pub title: &'static str,
    pub vars: Vec<(String, String)>,
}

/// Pair each token with a slug unique within its category.
pub(super) fn unique_slugs<T: Token>(tokens: &[T]) -> Vec<(&T, String)> {
    let mut names = UniqueNames::new("-");
    tokens
        .iter()
        .map(|t| (t, names.claim(slug(t.name()))))
        .collect()
}

fn simple_section<T: Token>(
    title: &'static str,
    tokens: &[T],
    prefix: Option<&str>,
    value: impl Fn(&T) -> String,
) -> Section {
    let vars = unique_slugs(tokens)
        .into_iter()
        .map(|(t, s)| (var_name(prefix, T::CATEGORY.as_str(), &s), value(t)))
        .collect();
    Section { title, vars }
}

pub(super) fn color_section(tokens: &TokenCollection, prefix: Option<&str>) -> Section {
    simple_section("Colors", tokens.colors(), prefix, |c| c.value.clone())
}

pub(super) fn typography_section(tokens: &TokenCollection, prefix: Option<&str>) -> Section {
    let category = TokenCategory::Typography.as_str();
    let mut vars = Vec::new();
    for (token, s) in unique_slugs(tokens.typography()) {
        let base = var_name(prefix, category, &s);
        vars.extend(typography_vars(token, &base));
    }
    Section {
        title: "Typography",
        vars,
    }
}

fn typography_vars(token: &TypographyToken, base: &str) -> Vec<(String, String)> {
    let mut vars = vec![
        (format!("{}-family", base), quote_family(&token.font_family)),
        (format!("{}-size", base), format!("{}px", format_number(token.font_size))),
        (format!("{}-line-height", base), token.line_height.to_string()),
        (format!("{}-weight", base), token.font_weight.to_string()),
    ];
    if let Some(ls) = token.letter_spacing {
        vars.push((format!("{}-letter-spacing", base), format!("{}px", format_number(ls))));
    }
    vars
}

/// Quote a font family for use as a CSS value.
///
/// Control characters become hex escapes, so a newline is written as `\A `.
pub(super) fn quote_family(family: &str) -> String {
    let mut out = String::with_capacity(family.len() + 2);
    out.push('"');
    for c in family.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => out.push_str(&format!("\\{:X} ", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// All five categories, skipping empty ones.
fn sections(tokens: &TokenCollection, prefix: Option<&str>) -> Vec<Section> {
    vec![
        color_section(tokens, prefix),
        typography_section(tokens, prefix),
        simple_section("Spacing", tokens.spacing(), prefix, |s| s.css()),
        simple_section("Shadows", tokens.shadows(), prefix, |s| s.value.clone()),
        simple_section("Border radius", tokens.border_radius(), prefix, |r| r.css()),
    ]
    .into_iter()
    .filter(|s| !s.vars.is_empty())
    .collect()
}

/// Write `selector { --name: value; ... }` with optional section comments.
pub(super) fn write_custom_properties(
    out: &mut String,
    selector: &str,
    sections: &[Section],
    comments: bool,
    value: impl Fn(&str, &str) -> String,
) -> std::fmt::Result {
    writeln!(out, "{} {{", selector)?;
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if comments {
            writeln!(out, "  /* {} */", section.title)?;
        }
        for (name, v) in &section.vars {
            writeln!(out, "  --{}: {};", name, value(name, v))?;
        }
    }
    writeln!(out, "}}")
}

pub struct CssExporter;

impl Exporter for CssExporter {
    fn render(
        &self,
        tokens: &TokenCollection,
        options: &ExportOptions,
        out: &mut String,
    ) -> Result<()> {
        if options.include_comments {
            let source_name = comment_text(&tokens.metadata().source_name);
            writeln!(out, "/* Design tokens: {} */", source_name)?;
            writeln!(out)?;
        }
        let sections = sections(tokens, options.prefix());
        write_custom_properties(
            out,
            &options.selector(),
            &sections,
            options.include_comments,
            |_, v| v.to_string(),
        )?;
        Ok(())
    }
}
