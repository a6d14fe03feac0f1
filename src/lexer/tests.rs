//! Unit tests for the lexer module.

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind, TokenValue},
};
use crate::{errors::errors::ErrorImpl, Position, Span};

fn tokens(source: &str) -> Vec<Token> {
    tokenize(source.to_string(), Some("test.cj".to_string()))
        .collect_tokens()
        .unwrap()
}

fn single_line_span(length: usize) -> Span {
    Span {
        start: Position::new(0, 0, 0),
        end: Position::new(length, 0, length),
    }
}

#[test]
fn test_tokenize_comment() {
    let tokens = tokens("# comment");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, TokenValue::Text(" comment".to_string()));
    assert_eq!(tokens[0].span, single_line_span(9));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_comment_stops_at_line_feed() {
    let tokens = tokens("#one\nfoo");

    assert_eq!(tokens[0].value, TokenValue::Text("one".to_string()));
    assert_eq!(tokens[0].span.end, Position::new(4, 0, 4));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].span.start, Position::new(5, 1, 0));
}

#[test]
fn test_tokenize_keywords() {
    for keyword in ["let", "import", "from"] {
        let tokens = tokens(keyword);

        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].value, TokenValue::Text(keyword.to_string()));
        assert_eq!(tokens[0].span, single_line_span(keyword.len()));
    }
}

#[test]
fn test_tokenize_identifiers() {
    for identifier in ["variableName", "ClassName", "a1", "a123", "letter", "nullable"] {
        let tokens = tokens(identifier);

        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].value, TokenValue::Text(identifier.to_string()));
        assert_eq!(tokens[0].span, single_line_span(identifier.len()));
    }
}

#[test]
fn test_identifier_has_no_underscore() {
    let result = tokenize("foo_bar".to_string(), None).collect_tokens();

    let error = result.unwrap_err();
    assert_eq!(error.get_impl(), &ErrorImpl::UnexpectedCharacter { character: '_' });
    assert_eq!(error.get_position(), &Position::new(3, 0, 3));
}

#[test]
fn test_tokenize_punctuators() {
    let punctuators = [
        "%", "(", ")", "*", "+", ",", "-", ".", "/", ":", ";", "?", "[", "]", "^", "{", "}", "~",
        "<", ">", "=", "!", "&", "|", "<<", ">>", "&&", "||", "==", "!=", ">>>",
    ];

    for punctuator in punctuators {
        let tokens = tokens(punctuator);

        assert_eq!(tokens.len(), 2, "{punctuator} should be a single token");
        assert_eq!(tokens[0].kind, TokenKind::Punctuator);
        assert_eq!(tokens[0].value, TokenValue::Text(punctuator.to_string()));
        assert_eq!(tokens[0].span, single_line_span(punctuator.len()));
    }
}

#[test]
fn test_punctuators_prefer_longest_match() {
    let values = tokens(">>>> <<< !==")
        .into_iter()
        .filter(|token| token.kind == TokenKind::Punctuator)
        .map(|token| token.value.to_string())
        .collect::<Vec<_>>();

    assert_eq!(values, vec![">>>", ">", "<<", "<", "!=", "="]);
}

#[test]
fn test_token_is_checks_kind_and_text() {
    let scanned = tokens("let ( x");

    assert!(scanned[0].is(TokenKind::Keyword, "let"));
    assert!(!scanned[0].is(TokenKind::Identifier, "let"));
    assert!(scanned[1].is(TokenKind::Punctuator, "("));
    assert!(!scanned[1].is(TokenKind::Punctuator, ")"));
    assert!(!scanned[3].is(TokenKind::EOF, ""));
}

#[test]
fn test_tokenize_null_literal() {
    let tokens = tokens("null");

    assert_eq!(tokens[0].kind, TokenKind::NullLiteral);
    assert_eq!(tokens[0].value, TokenValue::Text("null".to_string()));
    assert_eq!(tokens[0].span, single_line_span(4));
}

#[test]
fn test_tokenize_boolean_literals() {
    for boolean in ["true", "false"] {
        let tokens = tokens(boolean);

        assert_eq!(tokens[0].kind, TokenKind::BooleanLiteral);
        assert_eq!(tokens[0].value, TokenValue::Text(boolean.to_string()));
        assert_eq!(tokens[0].span, single_line_span(boolean.len()));
    }
}

#[test]
fn test_tokenize_numeric_literals() {
    for (source, value) in [("1", 1), ("123", 123), ("007", 7)] {
        let tokens = tokens(source);

        assert_eq!(tokens[0].kind, TokenKind::NumericLiteral);
        assert_eq!(tokens[0].value, TokenValue::Number(value));
        assert_eq!(tokens[0].span, single_line_span(source.len()));
    }
}

#[test]
fn test_numeric_literal_then_identifier() {
    let tokens = tokens("12ab");

    assert_eq!(tokens[0].value, TokenValue::Number(12));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, TokenValue::Text("ab".to_string()));
}

#[test]
fn test_numeric_literal_overflow() {
    let error = tokenize("let x: Int = 99999999999999999999999;".to_string(), None)
        .collect_tokens()
        .unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position(), &Position::new(13, 0, 13));
}

#[test]
fn test_tokenize_character_literals() {
    for (source, value) in [("'a'", "a"), ("'b'", "b"), ("' '", " ")] {
        let tokens = tokens(source);

        assert_eq!(tokens[0].kind, TokenKind::CharacterLiteral);
        assert_eq!(tokens[0].value, TokenValue::Text(value.to_string()));
        assert_eq!(tokens[0].span, single_line_span(3));
    }
}

#[test]
fn test_malformed_character_literals() {
    for (source, column) in [("''", 1), ("'ab'", 2), ("'a", 2), ("'", 1)] {
        let error = tokenize(source.to_string(), None).collect_tokens().unwrap_err();

        assert_eq!(error.get_error_name(), "MalformedCharacterLiteral", "{source}");
        assert_eq!(error.get_position().column, column, "{source}");
    }
}

#[test]
fn test_tokenize_string_literals() {
    let tokens = tokens("\"hello world\"");

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, TokenValue::Text("hello world".to_string()));
    assert_eq!(tokens[0].span, single_line_span(13));
}

#[test]
fn test_tokenize_multiline_string_literal() {
    let tokens = tokens("\"one\ntwo\nthree\" x");

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, TokenValue::Text("one\ntwo\nthree".to_string()));
    assert_eq!(tokens[0].span.start, Position::new(0, 0, 0));
    assert_eq!(tokens[0].span.end, Position::new(15, 2, 6));
    assert_eq!(tokens[1].span.start, Position::new(16, 2, 7));
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokens(r#""""#);

    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, TokenValue::Text(String::new()));
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("let s: Str = \"abc\ndef".to_string(), Some("test.cj".to_string()))
        .collect_tokens()
        .unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnexpectedEndOfFile);
    assert_eq!(error.get_position(), &Position::new(21, 1, 3));
    assert_eq!(error.to_string(), "Unexpected end of file at line 2 at column 4\n\tdef\n\t   ^");
}

#[test]
fn test_tokenize_end_of_file() {
    let tokens = tokens("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, TokenValue::None);
    assert_eq!(tokens[0].span, Span::default());
}

#[test]
fn test_end_of_file_repeats() {
    let mut lexer = tokenize("  foo \n".to_string(), None);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);

    let eof = lexer.next_token().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.span.start, eof.span.end);
    assert_eq!(eof.span.start, Position::new(7, 1, 0));

    assert_eq!(lexer.next_token().unwrap(), eof);
    assert_eq!(lexer.next_token().unwrap(), eof);
}

#[test]
fn test_iterator_stops_after_end_of_file() {
    let mut lexer = tokenize("a".to_string(), None);

    assert!(lexer.next().is_some());
    assert!(matches!(lexer.next(), Some(Ok(Token { kind: TokenKind::EOF, .. }))));
    assert!(lexer.next().is_none());
}

#[test]
fn test_unexpected_character() {
    let error = tokenize("let x: Int = 5;\nfoo(@);".to_string(), None)
        .collect_tokens()
        .unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnexpectedCharacter { character: '@' });
    assert_eq!(error.get_position(), &Position::new(20, 1, 4));
    assert_eq!(error.to_string(), "Unexpected character \"@\" at line 2 at column 5\n\tfoo(@);\n\t    ^");
}

#[test]
fn test_tab_is_not_whitespace() {
    let error = tokenize("\tfoo".to_string(), None).collect_tokens().unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnexpectedCharacter { character: '\t' });
}

#[test]
fn test_error_is_raised_lazily() {
    let mut lexer = tokenize("foo $".to_string(), None);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert!(lexer.next_token().is_err());
}

#[test]
fn test_tokenize_declaration() {
    let kinds = tokens("let x: Int? = 'c';")
        .iter()
        .map(|token| token.kind)
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Punctuator,
            TokenKind::Identifier,
            TokenKind::Punctuator,
            TokenKind::Punctuator,
            TokenKind::CharacterLiteral,
            TokenKind::Punctuator,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_offsets_count_characters() {
    let tokens = tokens("\"héllo\" x");

    assert_eq!(tokens[0].span.end, Position::new(7, 0, 7));
    assert_eq!(tokens[1].span.start, Position::new(8, 0, 8));
}
