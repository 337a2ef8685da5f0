//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Decimal, octal and hexadecimal literals
//! - Operators and punctuation
//! - Comments
//! - On-demand scanning and EOF repetition
//! - Error cases

use rstest::rstest;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{TokenKind, TokenValue},
    TokenSource, TokenStream,
};

#[test]
fn test_token_kind_ids_match_table_order() {
    for (index, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(kind.id(), index);
        assert_eq!(TokenKind::from_id(index), Some(*kind));
    }
    assert_eq!(TokenKind::from_id(TokenKind::COUNT), None);
}

#[test]
fn test_tokenize_keywords() {
    let source = "break case const continue default do else for if int return switch void while".to_string();
    let tokens = tokenize(source, Some("test.mc".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Break);
    assert_eq!(tokens[1].kind, TokenKind::Case);
    assert_eq!(tokens[2].kind, TokenKind::Const);
    assert_eq!(tokens[3].kind, TokenKind::Continue);
    assert_eq!(tokens[4].kind, TokenKind::Default);
    assert_eq!(tokens[5].kind, TokenKind::Do);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::For);
    assert_eq!(tokens[8].kind, TokenKind::If);
    assert_eq!(tokens[9].kind, TokenKind::Int);
    assert_eq!(tokens[10].kind, TokenKind::Return);
    assert_eq!(tokens[11].kind, TokenKind::Switch);
    assert_eq!(tokens[12].kind, TokenKind::Void);
    assert_eq!(tokens[13].kind, TokenKind::While);
    assert_eq!(tokens[14].kind, TokenKind::EOF);

    assert!(tokens.iter().all(|token| !token.has_payload()));
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore integer".to_string();
    let tokens = tokenize(source, Some("test.mc".to_string())).unwrap();

    let names: Vec<TokenValue> = tokens.iter().map(|token| token.value.clone()).collect();
    assert_eq!(
        names,
        vec![
            TokenValue::Identifier("foo".to_string()),
            TokenValue::Identifier("bar".to_string()),
            TokenValue::Identifier("baz_123".to_string()),
            TokenValue::Identifier("_underscore".to_string()),
            TokenValue::Identifier("integer".to_string()),
            TokenValue::None,
        ]
    );
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[rstest]
#[case("42", 42)]
#[case("0", 0)]
#[case("017", 15)]
#[case("0x1F", 31)]
#[case("0XfF", 255)]
fn test_tokenize_numbers(#[case] source: &str, #[case] expected: i64) {
    let tokens = tokenize(source.to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, TokenValue::Number(expected));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_number_overflow() {
    let result = tokenize("99999999999999999999".to_string(), None);

    assert_eq!(result.unwrap_err().get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < > <= >= = && || !".to_string();
    let tokens = tokenize(source, Some("test.mc".to_string())).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    let source = "++ -- += -= *= /= %=".to_string();
    let tokens = tokenize(source, Some("test.mc".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::PlusPlus);
    assert_eq!(tokens[1].kind, TokenKind::MinusMinus);
    assert_eq!(tokens[2].kind, TokenKind::PlusEquals);
    assert_eq!(tokens[3].kind, TokenKind::MinusEquals);
    assert_eq!(tokens[4].kind, TokenKind::StarEquals);
    assert_eq!(tokens[5].kind, TokenKind::SlashEquals);
    assert_eq!(tokens[6].kind, TokenKind::PercentEquals);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } [ ] , ; :".to_string();
    let tokens = tokenize(source, Some("test.mc".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[5].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[6].kind, TokenKind::Comma);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens[8].kind, TokenKind::Colon);
    assert_eq!(tokens[9].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let source = "int x; // line comment\n/* block\n comment */ int y;".to_string();
    let tokens = tokenize(source, Some("test.mc".to_string())).unwrap();

    assert_eq!(tokens.len(), 7); // int x ; int y ; EOF
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, TokenValue::Identifier("x".to_string()));
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].value, TokenValue::Identifier("y".to_string()));
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_comment() {
    let result = tokenize("int x; /* never closed".to_string(), None);

    assert_eq!(result.unwrap_err().get_error_name(), "UnterminatedComment");
}

#[test]
fn test_tokenize_unrecognized_token() {
    let source = "int x = @;".to_string();
    let result = tokenize(source, Some("test.mc".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("int  main".to_string(), Some("test.mc".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 9);
    assert_eq!(tokens[2].span.start.0, 9);
    assert_eq!(tokens[1].span.start.1.as_str(), "test.mc");
}

#[test]
fn test_lexer_repeats_eof() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EOF);
    assert!(lexer.at_eof());
}

#[test]
fn test_token_stream_counts_and_repeats_eof() {
    let tokens = tokenize("a b".to_string(), None).unwrap();
    let mut stream = TokenStream::new(tokens);

    assert_eq!(stream.remaining(), 2);
    assert_eq!(stream.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(stream.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(stream.next_token().unwrap().kind, TokenKind::EOF);
    assert_eq!(stream.consumed(), 4);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("count 7 <=".to_string(), None).unwrap();

    assert_eq!(tokens[0].to_string(), "count");
    assert_eq!(tokens[1].to_string(), "7");
    assert_eq!(tokens[2].to_string(), "<=");
    assert_eq!(tokens[3].to_string(), "EOF");
}
