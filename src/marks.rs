//! Shallow scanner for `// MARK:` comments
//!
//! Mark generation deliberately does not run the declaration grammar: it
//! only needs to know whether a container declaration follows the cursor,
//! and if so, its name. A flat logos token scan that filters attributes and
//! declaration modifiers is enough for that.

use logos::Logos;

use crate::grammar::lexical::MODIFIERS;

/// Tokens for the mark scan.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum Token {
    #[token("struct")]
    Struct,

    #[token("class")]
    Class,

    #[token("enum")]
    Enum,

    #[token("extension")]
    Extension,

    // Attributes such as @available; any argument list shows up as
    // separate paren tokens and is filtered with them.
    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    Attribute,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    // Catch-all for punctuation so the scan can stop on it
    #[regex(r"[^A-Za-z0-9_@()\s]")]
    Symbol,
}

/// Words skipped while looking for a container keyword: declaration
/// modifiers, plus the `set` of `private(set)`-style groups (its parens are
/// filtered as tokens).
fn is_filtered_word(word: &str) -> bool {
    word == "set" || MODIFIERS.contains(&word)
}

/// Scan the text after the cursor for a container declaration and return
/// the mark title: the container's name, or the placeholder `Title`.
pub(crate) fn title(lines: &[String], from_line: usize) -> String {
    let text = lines
        .get(from_line..)
        .map(|rest| rest.join("\n"))
        .unwrap_or_default();
    scan_title(&text)
}

fn scan_title(text: &str) -> String {
    let mut lexer = Token::lexer(text);
    let mut kind_seen = false;
    for result in &mut lexer {
        let Ok(token) = result else {
            break;
        };
        match token {
            Token::Attribute | Token::OpenParen | Token::CloseParen => continue,
            Token::Struct | Token::Class | Token::Enum | Token::Extension if !kind_seen => {
                kind_seen = true;
            }
            Token::Word(word) if kind_seen => return word,
            Token::Word(word) if is_filtered_word(&word) => continue,
            _ => break,
        }
    }
    "Title".to_string()
}
