//! Declaration shapes and the top-level dispatcher
//!
//! Three declaration shapes are recognized: callables (`func`, `init`,
//! `subscript`), type containers (`class`, `struct`, `enum`, `protocol`),
//! and members (`var`, `let`, `typealias`, `associatedtype`). Each shape is
//! a composed parser yielding a structured result; [`declaration`] tries
//! them in priority order and falls back to [`Declaration::Generic`], so the
//! top-level parse never fails.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::grammar::lexical::{
    attribute, default_value, dotted_identifier, function_name, identifier, modifiers, Type,
};
use crate::parse::{
    always, any, first, lit, lit_ws, optional, zip, zip3, zip4, zip7, Parser,
};

/// A single function argument: reported name, type, and whether a default
/// value was present (its content is discarded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub has_default: bool,
}

impl Argument {
    /// Parser for one argument specification.
    ///
    /// With an `external internal:` pair the external label is reported,
    /// unless it is `_`, in which case the internal name is.
    pub fn parser() -> Parser<Argument> {
        zip4(
            first(vec![
                zip(identifier(), identifier())
                    .map(|(label, name)| if label != "_" { label } else { name }),
                identifier(),
            ]),
            lit(":"),
            argument_type(),
            default_value(),
        )
        .map(|(name, _, ty, has_default)| Argument {
            name,
            ty,
            has_default,
        })
    }
}

fn argument_modifiers() -> Parser<Vec<String>> {
    any(first(vec![lit("inout"), attribute()]), lit_ws(" ", false))
}

fn argument_type() -> Parser<Type> {
    zip(argument_modifiers(), Type::parser()).map(|(_, ty)| ty)
}

fn arguments() -> Parser<Vec<Argument>> {
    any(Argument::parser(), lit(","))
}

fn return_type() -> Parser<Type> {
    zip(lit("->"), Type::parser()).map(|(_, ty)| ty)
}

/// A parsed callable declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub args: Vec<Argument>,
    pub throwable: bool,
    pub returns: Option<Type>,
}

impl Function {
    /// Parser for `func`, `subscript`, and `init` declarations.
    ///
    /// A return spelled `()`, `Void`, or `nil` is normalized to no return.
    /// A trailing `where` clause is not parsed; it is left behind once the
    /// shape has matched.
    pub fn parser() -> Parser<Function> {
        zip7(
            modifiers(),
            first(vec![
                zip(lit("func"), function_name()).map(|(_, name)| name),
                lit("subscript"),
                lit("init?"),
                lit("init"),
            ]),
            lit("("),
            arguments(),
            lit(")"),
            optional(lit("throws")),
            optional(return_type()),
        )
        .map(|(_, name, _, args, _, throws, returns)| Function {
            name,
            args,
            throwable: throws.is_some(),
            returns: returns
                .filter(|ty| ty.optional || !matches!(ty.spec.as_str(), "()" | "Void" | "nil")),
        })
    }
}

/// The kind of a type container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Class,
    Struct,
    Enum,
    Protocol,
}

/// A parsed container declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub kind: ContainerKind,
    pub name: String,
    pub inherits: Option<String>,
}

impl Container {
    /// Parser for `class`, `struct`, `enum`, and `protocol` declarations.
    ///
    /// Only the first supertype or conformance name is captured; anything
    /// after it is ignored.
    pub fn parser() -> Parser<Container> {
        zip4(
            modifiers(),
            first(vec![
                lit("class").to(ContainerKind::Class),
                lit("struct").to(ContainerKind::Struct),
                lit("enum").to(ContainerKind::Enum),
                lit("protocol").to(ContainerKind::Protocol),
            ]),
            identifier(),
            supertype(),
        )
        .map(|(_, kind, name, inherits)| Container {
            kind,
            name,
            inherits,
        })
    }
}

fn supertype() -> Parser<Option<String>> {
    optional(zip(lit(":"), dotted_identifier())).map(|parent| parent.map(|(_, name)| name))
}

/// The kind of a member declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Var,
    Let,
    Typealias,
    Associatedtype,
}

/// A parsed member declaration. Type annotations and initializers are not
/// captured; only the name matters for the one-line comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub kind: PropertyKind,
    pub name: String,
}

impl Property {
    /// Parser for `var`, `let`, `typealias`, and `associatedtype`
    /// declarations.
    pub fn parser() -> Parser<Property> {
        zip3(
            modifiers(),
            first(vec![
                zip(optional(lit("lazy")), lit("var")).to(PropertyKind::Var),
                lit("typealias").to(PropertyKind::Typealias),
                lit("associatedtype").to(PropertyKind::Associatedtype),
                lit("let").to(PropertyKind::Let),
            ]),
            identifier(),
        )
        .map(|(_, kind, name)| Property { kind, name })
    }
}

/// The result of the top-level parse: one of the three declaration shapes,
/// or the generic fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Declaration {
    Function(Function),
    Container(Container),
    Property(Property),
    Generic,
}

static DECLARATION: Lazy<Parser<Declaration>> = Lazy::new(|| {
    first(vec![
        Function::parser().map(Declaration::Function),
        Container::parser().map(Declaration::Container),
        Property::parser().map(Declaration::Property),
        always(Declaration::Generic),
    ])
});

/// The top-level dispatcher.
///
/// Shapes are tried in priority order: function-looking text first, then
/// containers, then members; the always-succeeding `Generic` fallback fires
/// only when none match. The composed grammar is built once and shared.
pub fn declaration() -> Parser<Declaration> {
    DECLARATION.clone()
}
