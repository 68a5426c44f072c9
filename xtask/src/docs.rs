//! Doc comment lint for the failure producers in `src/throw.rs`.
//!
//! Every `pub fn` at the top level of the file is a producer. A producer
//! without a `///` comment gets a diagnostic pointing at its first line (its
//! first attribute, or the `pub` keyword), and `apply_default_docs` inserts
//! [`DEFAULT_COMMENT`] right above that line with matching indentation.

use anyhow::{Context, Result};
use syn::spanned::Spanned;
use syn::{Item, Visibility};

/// Text inserted for an undocumented producer.
pub const DEFAULT_COMMENT: &str = "Builds the default error for this violation.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndocumentedProducer {
    pub name: String,
    /// 1-based line of the item's first token.
    pub line: usize,
}

pub fn lint(source: &str) -> Result<Vec<UndocumentedProducer>> {
    let file = syn::parse_file(source).context("Failed to parse source file")?;

    let diagnostics = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Fn(function) => Some(function),
            _ => None,
        })
        .filter(|function| matches!(function.vis, Visibility::Public(_)))
        .filter(|function| !function.attrs.iter().any(|attr| attr.path().is_ident("doc")))
        .map(|function| UndocumentedProducer {
            name: function.sig.ident.to_string(),
            line: function.span().start().line,
        })
        .collect();

    Ok(diagnostics)
}

/// Inserts one comment line per diagnostic. Nothing else in `source` changes.
pub fn apply_default_docs(source: &str, diagnostics: &[UndocumentedProducer]) -> String {
    let mut lines: Vec<String> = source.lines().map(str::to_owned).collect();

    let mut targets: Vec<usize> = diagnostics.iter().map(|diagnostic| diagnostic.line).collect();
    targets.sort_unstable();
    targets.dedup();

    // Bottom-up so earlier line numbers stay valid.
    for &line in targets.iter().rev() {
        let Some(index) = line.checked_sub(1).filter(|&index| index < lines.len()) else {
            continue;
        };
        let indent: String = lines[index]
            .chars()
            .take_while(|c| c.is_whitespace())
            .collect();
        lines.insert(index, format!("{indent}/// {DEFAULT_COMMENT}"));
    }

    let mut fixed = lines.join("\n");
    if source.ends_with('\n') {
        fixed.push('\n');
    }
    fixed
}
