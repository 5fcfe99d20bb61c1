//! End-to-end tests for comment generation
//!
//! Each case runs the full path: buffer lines and a cursor in, comment lines
//! out. The single-line cases pin the exact template shapes; the rest cover
//! blank-line skipping, indentation, multi-line declarations, and the
//! structured result exposed for tooling.

use blockdoc::{generate_block_comment, generate_mark_comment, parse_declaration, Declaration};
use rstest::rstest;

fn buffer(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[rstest]
#[case::plain_function(
    "func foo()",
    vec!["/**", " <#Describe foo#>", " */"]
)]
#[case::throwing_function_with_return(
    "func foo() throws -> Int",
    vec![
        "/**",
        " <#Describe foo#>",
        "",
        " - returns: <#Int#>",
        " - throws <#Describe exceptions#>",
        " */",
    ]
)]
#[case::container_with_conformance(
    "public struct Blah: Foo {",
    vec!["/**", " <#Describe Blah#>", " - SeeAlso: `Foo`", " */"]
)]
#[case::property(
    "private let foo: Int",
    vec!["/// <#Describe foo#>"]
)]
#[case::generic_fallback(
    "this is not a declaration",
    vec!["/// "]
)]
#[case::initializer(
    "convenience init?(coder: NSCoder)",
    vec![
        "/**",
        " <#Describe init?#>",
        "",
        " - parameter coder: <#Describe coder#>",
        " */",
    ]
)]
#[case::typealias(
    "typealias Handler = (Int) -> Void",
    vec!["/// <#Describe Handler#>"]
)]
fn test_block_comment_templates(#[case] line: &str, #[case] expected: Vec<&str>) {
    assert_eq!(generate_block_comment(&buffer(&[line]), 0), expected);
}

#[rstest]
#[case::void_spelling("func a() -> Void")]
#[case::empty_tuple_spelling("func a() -> ()")]
#[case::nil_spelling("func a() -> nil")]
fn test_no_returns_line_for_void_spellings(#[case] line: &str) {
    let comment = generate_block_comment(&buffer(&[line]), 0);
    assert!(comment.iter().all(|l| !l.contains("- returns")), "{comment:?}");
}

#[rstest]
#[case::bool_return("func a() -> Bool", "Bool")]
#[case::array_return("func a() -> [Int]", "[Int]")]
#[case::tuple_return("func a() -> (Int, Int)", "(Int, Int)")]
#[case::optional_void("func a() -> ()?", "()?")]
fn test_returns_line_keeps_spelling(#[case] line: &str, #[case] spelling: &str) {
    let comment = generate_block_comment(&buffer(&[line]), 0);
    let expected = format!(" - returns: <#{spelling}#>");
    assert!(comment.contains(&expected), "{comment:?}");
}

#[test]
fn test_parameter_lines_preserve_argument_order() {
    let comment =
        generate_block_comment(&buffer(&["func f(a: Int, b: String, c: Double)"]), 0);
    let parameters: Vec<&str> = comment
        .iter()
        .filter(|l| l.contains("- parameter"))
        .map(String::as_str)
        .collect();
    assert_eq!(
        parameters,
        [
            " - parameter a: <#Describe a#>",
            " - parameter b: <#Describe b#>",
            " - parameter c: <#Describe c#>",
        ]
    );
}

#[test]
fn test_throws_line_only_when_throws_matched() {
    let throwing = generate_block_comment(&buffer(&["func a() throws"]), 0);
    assert!(throwing.iter().any(|l| l.contains("- throws")));

    let plain = generate_block_comment(&buffer(&["func a() -> Int"]), 0);
    assert!(plain.iter().all(|l| !l.contains("- throws")));
}

#[test]
fn test_closure_argument_parses_as_single_argument() {
    let declaration = parse_declaration(&buffer(&["func f(c: (Int) -> Void)"]), 0);
    let Some(Declaration::Function(function)) = declaration else {
        panic!("expected a function, got {declaration:?}");
    };
    assert_eq!(function.args.len(), 1);
    assert_eq!(function.args[0].name, "c");
    assert_eq!(function.args[0].ty.spec, "(Int)->Void");
}

#[test]
fn test_declaration_spanning_multiple_lines() {
    let lines = buffer(&[
        "    func resize(",
        "        width: Int,",
        "        height: Int = 0) throws -> Bool {",
    ]);
    assert_eq!(
        generate_block_comment(&lines, 0),
        vec![
            "    /**",
            "     <#Describe resize#>",
            "    ",
            "     - parameter width: <#Describe width#>",
            "     - parameter height: <#Describe height#>",
            "     - returns: <#Bool#>",
            "     - throws <#Describe exceptions#>",
            "     */",
        ]
    );
}

#[test]
fn test_cursor_skips_blank_lines_to_declaration() {
    let lines = buffer(&["func above()", "", "   ", "  enum Direction {"]);
    assert_eq!(
        generate_block_comment(&lines, 1),
        vec!["  /**", "   <#Describe Direction#>", "   */"]
    );
}

#[test]
fn test_empty_result_when_nothing_at_or_after_cursor() {
    let lines = buffer(&["func above()", "", "   "]);
    assert!(generate_block_comment(&lines, 1).is_empty());
    assert!(generate_block_comment(&lines, 99).is_empty());
}

#[rstest]
#[case::struct_mark("struct Point {", "// MARK: - <#Point#>")]
#[case::class_mark("public final class Renderer {", "// MARK: - <#Renderer#>")]
#[case::enum_mark("enum Direction {", "// MARK: - <#Direction#>")]
#[case::extension_mark("extension String {", "// MARK: - <#String#>")]
#[case::placeholder_mark("func foo()", "// MARK: - <#Title#>")]
fn test_mark_comment(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(generate_mark_comment(&buffer(&[line]), 0), vec![expected]);
}

#[test]
fn test_mark_comment_never_runs_declaration_grammar() {
    // A malformed function is still just "no container" for the mark scan.
    let lines = buffer(&["func broken((((("]);
    assert_eq!(generate_mark_comment(&lines, 0), vec!["// MARK: - <#Title#>"]);
}

#[test]
fn test_declaration_serializes_for_tooling() {
    let declaration = parse_declaration(&buffer(&["private let foo: Int"]), 0)
        .expect("declaration");
    let json = serde_json::to_value(&declaration).expect("json");
    assert_eq!(json["Property"]["kind"], "let");
    assert_eq!(json["Property"]["name"], "foo");
}
