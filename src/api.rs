//! Public entry points
//!
//! The host integration hands over the buffer's lines and a cursor line and
//! splices the returned lines back into its own buffer; nothing here mutates
//! editor state. Both entry points skip blank lines forward from the cursor
//! and prefix every produced line with the declaration line's indentation.
//! Neither can fail: unsupported syntax degrades to a generic template.

use crate::comment::{mark_line, Commentary};
use crate::grammar::declarations::{declaration, Declaration};
use crate::marks;
use crate::source::Source;

/// Locate the first non-blank line at or after `from`.
fn first_non_blank(lines: &[String], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&index| !lines[index].trim().is_empty())
}

/// Generate a documentation-comment template for the declaration at or
/// after `cursor_line`.
///
/// Returns an empty sequence only when no non-blank line exists at or after
/// the cursor; otherwise at least the generic one-line template is produced.
pub fn generate_block_comment(lines: &[String], cursor_line: usize) -> Vec<String> {
    let Some(start) = first_non_blank(lines, cursor_line) else {
        return Vec::new();
    };
    let source = Source::new(lines.to_vec(), start);
    let indent = source.indentation();
    declaration()
        .parse(&source)
        .map(|decl| decl.commentary())
        .unwrap_or_default()
        .into_iter()
        .map(|line| format!("{indent}{line}"))
        .collect()
}

/// Generate a `// MARK:` comment for the container at or after
/// `cursor_line`. Always returns exactly one line; without a container the
/// title is a placeholder.
pub fn generate_mark_comment(lines: &[String], cursor_line: usize) -> Vec<String> {
    match first_non_blank(lines, cursor_line) {
        Some(start) => {
            let source = Source::new(lines.to_vec(), start);
            let indent = source.indentation();
            vec![format!("{indent}{}", mark_line(&marks::title(lines, start)))]
        }
        None => vec![mark_line("Title")],
    }
}

/// Parse the declaration at or after `cursor_line` without rendering it.
///
/// `None` means there was nothing to parse at all; unrecognized syntax is
/// reported as [`Declaration::Generic`].
pub fn parse_declaration(lines: &[String], cursor_line: usize) -> Option<Declaration> {
    let start = first_non_blank(lines, cursor_line)?;
    declaration().parse(&Source::new(lines.to_vec(), start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_block_comment_applies_indentation() {
        let buffer = lines(&["    func foo()"]);
        assert_eq!(
            generate_block_comment(&buffer, 0),
            vec!["    /**", "     <#Describe foo#>", "     */"]
        );
    }

    #[test]
    fn test_block_comment_skips_blank_lines() {
        let buffer = lines(&["", "   ", "  let x: Int"]);
        assert_eq!(generate_block_comment(&buffer, 0), vec!["  /// <#Describe x#>"]);
    }

    #[test]
    fn test_block_comment_empty_when_nothing_follows() {
        let buffer = lines(&["func foo()", "", "  "]);
        assert!(generate_block_comment(&buffer, 1).is_empty());
        assert!(generate_block_comment(&buffer, 10).is_empty());
    }

    #[test]
    fn test_block_comment_generic_fallback_keeps_indent() {
        let buffer = lines(&["  ???"]);
        assert_eq!(generate_block_comment(&buffer, 0), vec!["  /// "]);
    }

    #[test]
    fn test_mark_comment_with_container() {
        let buffer = lines(&["  struct Point {"]);
        assert_eq!(
            generate_mark_comment(&buffer, 0),
            vec!["  // MARK: - <#Point#>"]
        );
    }

    #[test]
    fn test_mark_comment_always_one_line() {
        let buffer = lines(&["func foo()"]);
        assert_eq!(generate_mark_comment(&buffer, 0), vec!["// MARK: - <#Title#>"]);
        assert_eq!(generate_mark_comment(&buffer, 7), vec!["// MARK: - <#Title#>"]);
    }

    #[test]
    fn test_parse_declaration_exposes_structure() {
        let buffer = lines(&["private let foo: Int"]);
        let decl = parse_declaration(&buffer, 0).expect("declaration");
        assert!(matches!(decl, Declaration::Property(_)));
        assert!(parse_declaration(&lines(&["", ""]), 0).is_none());
    }
}
