//! Comment synthesis
//!
//! Pure, deterministic mapping from structured parse results to the lines of
//! a documentation-comment template. Placeholder tags use the `<#...#>`
//! delimiters the host editor recognizes as tab stops; the open and close
//! sequences must always be emitted as exact pairs. Indentation is applied
//! by the caller, not here.

use crate::grammar::declarations::{Container, Declaration, Function, Property};

const TAG_OPEN: &str = "<#";
const TAG_CLOSE: &str = "#>";

/// Wrap content in the editor's placeholder delimiters, producing a span the
/// user can tab to and overwrite.
fn tag(content: &str) -> String {
    format!("{TAG_OPEN}{content}{TAG_CLOSE}")
}

/// A one-line comment for entities that only need a description.
fn describe_line(name: &str) -> String {
    format!("/// {}", tag(&format!("Describe {name}")))
}

/// Parse results that can render themselves as a comment template.
pub trait Commentary {
    /// The comment lines, in order, before indentation is applied.
    fn commentary(&self) -> Vec<String>;
}

impl Commentary for Function {
    /// A block comment with a description line, one `- parameter` line per
    /// argument in declaration order, a `- returns:` line when the function
    /// returns, and a `- throws` line when it can throw.
    fn commentary(&self) -> Vec<String> {
        let mut lines = vec!["/**".to_string()];
        lines.push(format!(" {}", tag(&format!("Describe {}", self.name))));
        if !self.args.is_empty() || self.returns.is_some() || self.throwable {
            lines.push(String::new());
            for arg in &self.args {
                lines.push(format!(
                    " - parameter {}: {}",
                    arg.name,
                    tag(&format!("Describe {}", arg.name))
                ));
            }
            if let Some(returns) = &self.returns {
                lines.push(format!(" - returns: {}", tag(&returns.spelling())));
            }
            if self.throwable {
                lines.push(format!(" - throws {}", tag("Describe exceptions")));
            }
        }
        lines.push(" */".to_string());
        lines
    }
}

impl Commentary for Container {
    fn commentary(&self) -> Vec<String> {
        let mut lines = vec![
            "/**".to_string(),
            format!(" {}", tag(&format!("Describe {}", self.name))),
        ];
        if let Some(parent) = &self.inherits {
            lines.push(format!(" - SeeAlso: `{parent}`"));
        }
        lines.push(" */".to_string());
        lines
    }
}

impl Commentary for Property {
    fn commentary(&self) -> Vec<String> {
        vec![describe_line(&self.name)]
    }
}

impl Commentary for Declaration {
    fn commentary(&self) -> Vec<String> {
        match self {
            Declaration::Function(function) => function.commentary(),
            Declaration::Container(container) => container.commentary(),
            Declaration::Property(property) => property.commentary(),
            Declaration::Generic => vec!["/// ".to_string()],
        }
    }
}

/// The single line of a mark comment.
pub(crate) fn mark_line(title: &str) -> String {
    format!("// MARK: - {}", tag(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::declarations::{ContainerKind, PropertyKind};
    use crate::grammar::lexical::Type;

    #[test]
    fn test_function_without_extras_is_three_lines() {
        let f = Function {
            name: "foo".to_string(),
            args: vec![],
            throwable: false,
            returns: None,
        };
        assert_eq!(f.commentary(), vec!["/**", " <#Describe foo#>", " */"]);
    }

    #[test]
    fn test_function_full_commentary() {
        let f = Function {
            name: "load".to_string(),
            args: vec![crate::grammar::declarations::Argument {
                name: "path".to_string(),
                ty: Type {
                    spec: "String".to_string(),
                    optional: false,
                },
                has_default: false,
            }],
            throwable: true,
            returns: Some(Type {
                spec: "Data".to_string(),
                optional: true,
            }),
        };
        assert_eq!(
            f.commentary(),
            vec![
                "/**",
                " <#Describe load#>",
                "",
                " - parameter path: <#Describe path#>",
                " - returns: <#Data?#>",
                " - throws <#Describe exceptions#>",
                " */",
            ]
        );
    }

    #[test]
    fn test_container_commentary_with_parent() {
        let c = Container {
            kind: ContainerKind::Struct,
            name: "Blah".to_string(),
            inherits: Some("Foo".to_string()),
        };
        assert_eq!(
            c.commentary(),
            vec!["/**", " <#Describe Blah#>", " - SeeAlso: `Foo`", " */"]
        );
    }

    #[test]
    fn test_container_commentary_without_parent() {
        let c = Container {
            kind: ContainerKind::Enum,
            name: "Direction".to_string(),
            inherits: None,
        };
        assert_eq!(c.commentary(), vec!["/**", " <#Describe Direction#>", " */"]);
    }

    #[test]
    fn test_property_commentary_is_one_line() {
        let p = Property {
            kind: PropertyKind::Let,
            name: "foo".to_string(),
        };
        assert_eq!(p.commentary(), vec!["/// <#Describe foo#>"]);
    }

    #[test]
    fn test_generic_commentary_is_empty_tag() {
        assert_eq!(Declaration::Generic.commentary(), vec!["/// "]);
    }

    #[test]
    fn test_mark_line() {
        assert_eq!(mark_line("Title"), "// MARK: - <#Title#>");
    }
}
