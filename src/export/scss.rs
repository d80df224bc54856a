//! SCSS variables for colors and typography.
//!
//! Spacing, shadows and radii are not emitted in this format.

use std::fmt::Write;

use crate::error::Result;
use crate::types::TokenCollection;

use super::css::{color_section, typography_section, write_custom_properties};
use super::naming::comment_text;
use super::{ExportOptions, Exporter};

pub struct ScssExporter;

impl Exporter for ScssExporter {
    fn render(
        &self,
        tokens: &TokenCollection,
        options: &ExportOptions,
        out: &mut String,
    ) -> Result<()> {
        let comments = options.include_comments;
        let sections: Vec<_> = [
            color_section(tokens, options.prefix()),
            typography_section(tokens, options.prefix()),
        ]
        .into_iter()
        .filter(|s| !s.vars.is_empty())
        .collect();

        if comments {
            writeln!(out, "// Design tokens: {}", comment_text(&tokens.metadata().source_name))?;
        }

        for section in &sections {
            if !out.is_empty() {
                writeln!(out)?;
            }
            if comments {
                writeln!(out, "// {}", section.title)?;
            }
            for (name, value) in &section.vars {
                writeln!(out, "${}: {};", name, value)?;
            }
        }

        if options.use_custom_properties && !sections.is_empty() {
            writeln!(out)?;
            write_custom_properties(out, &options.selector(), &sections, comments, |name, _| {
                format!("#{{${}}}", name)
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{fixtures, ExportFormat};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_output() {
        let output = ScssExporter
            .export(&fixtures::sample(), &ExportOptions::new(ExportFormat::Scss))
            .unwrap();

        insta::assert_snapshot!(output, @r###"
        // Design tokens: Sample Kit

        // Colors
        $color-brand-primary: #0066ff;
        $color-white: #ffffff;

        // Typography
        $typography-heading-large-family: "Segoe UI";
        $typography-heading-large-size: 28px;
        $typography-heading-large-line-height: 36px;
        $typography-heading-large-weight: 700;

        :root {
          /* Colors */
          --color-brand-primary: #{$color-brand-primary};
          --color-white: #{$color-white};

          /* Typography */
          --typography-heading-large-family: #{$typography-heading-large-family};
          --typography-heading-large-size: #{$typography-heading-large-size};
          --typography-heading-large-line-height: #{$typography-heading-large-line-height};
          --typography-heading-large-weight: #{$typography-heading-large-weight};
        }
        "###);
    }

    #[test]
    fn test_variables_only() {
        let options = ExportOptions {
            include_comments: false,
            use_custom_properties: false,
            prefix: Some("ds".to_string()),
            ..ExportOptions::new(ExportFormat::Scss)
        };
        let output = ScssExporter.export(&fixtures::sample(), &options).unwrap();

        assert!(output.starts_with("$ds-color-brand-primary: #0066ff;\n"));
        assert!(!output.contains(":root"));
        assert!(!output.contains("spacing"));
        assert!(!output.contains("shadow"));
    }

    #[test]
    fn test_empty_collection_has_only_header() {
        let output = ScssExporter
            .export(&fixtures::empty(), &ExportOptions::new(ExportFormat::Scss))
            .unwrap();
        assert_eq!(output, "// Design tokens: Empty\n");
    }

    #[test]
    fn test_source_name_stays_on_header_line() {
        let hostile = fixtures::named(fixtures::HOSTILE_NAME);
        let output = ScssExporter
            .export(&hostile, &ExportOptions::new(ExportFormat::Scss))
            .unwrap();
        let header = output.lines().next().unwrap();

        assert!(header.starts_with("// Design tokens: Kit "));
        assert!(header.ends_with("globalThis.pwned = true;"));
        assert!(!output.lines().any(|line| line.starts_with("globalThis")));
    }
}
