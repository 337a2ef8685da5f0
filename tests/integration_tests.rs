//! Integration tests for end-to-end parsing.
//!
//! These tests drive the whole front end: scanning source text, parsing it
//! with the generated Mini C table, recovering from syntax errors and
//! rendering the resulting tree and diagnostics.

use minic::{
    ast::{ast::Ast, printer::render_tree, tags::NodeTag},
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, TokenStream},
    parser::{
        lookups::MINIC_TABLE,
        parser::{parse, parse_minic, ParserConfig},
    },
    render_error,
};

const BUBBLE: &str = include_str!("programs/bubble.mc");
const BROKEN: &str = include_str!("programs/broken.mc");

fn top_level_tags(ast: &Ast) -> Vec<Option<NodeTag>> {
    ast.child_tags(ast.root().unwrap())
}

#[test]
fn test_parse_complete_program() {
    let (parser, result) = parse_minic(BUBBLE.to_string(), Some("bubble.mc".to_string()));
    let ast = result.unwrap();

    assert!(parser.syntax_errors().is_empty());
    assert_eq!(
        top_level_tags(&ast),
        vec![
            Some(NodeTag::Dcl),
            Some(NodeTag::Dcl),
            Some(NodeTag::FuncDef),
            Some(NodeTag::FuncDef)
        ]
    );

    let stats = parser.stats();
    assert_eq!(ast.len(), stats.tagged_reductions + stats.leaves);
    assert_eq!(ast.preorder().len(), ast.len());
}

#[test]
fn test_program_tree_dump() {
    let (_, result) = parse_minic(BUBBLE.to_string(), Some("bubble.mc".to_string()));
    let dump = render_tree(&result.unwrap());

    assert!(dump.starts_with(" Nonterminal: PROGRAM\n"));
    assert!(dump.contains("\n      Nonterminal: FUNC_DEF\n"));
    assert!(dump.contains("Nonterminal: DO_WHILE_ST"));
    assert!(dump.contains("Nonterminal: LOGICAL_NOT"));
    assert!(dump.contains("Terminal: swap"));
    assert_eq!(dump.lines().filter(|line| line.trim() == "Nonterminal: FOR_ST").count(), 2);
}

#[test]
fn test_pre_scanned_tokens_give_the_same_tree() {
    let tokens = tokenize(BUBBLE.to_string(), Some("bubble.mc".to_string())).unwrap();
    let (_, from_stream) = parse(TokenStream::new(tokens), &MINIC_TABLE, ParserConfig::default());
    let (_, on_demand) = parse_minic(BUBBLE.to_string(), Some("bubble.mc".to_string()));

    assert_eq!(render_tree(&from_stream.unwrap()), render_tree(&on_demand.unwrap()));
}

#[test]
fn test_recovers_and_reports_each_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (parser, result) = parse_minic(BROKEN.to_string(), Some("broken.mc".to_string()));
    let ast = result.unwrap();

    let errors = parser.syntax_errors();
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        errors[0].get_internal(),
        ErrorImpl::SyntaxError { token, .. } if token == "int"
    ));
    assert!(matches!(
        errors[1].get_internal(),
        ErrorImpl::SyntaxError { token, .. } if token == "print"
    ));

    assert_eq!(top_level_tags(&ast), vec![Some(NodeTag::Dcl), Some(NodeTag::FuncDef)]);

    let dump = render_tree(&ast);
    assert!(dump.contains("Terminal: second"));
    assert!(!dump.contains("Terminal: first"));
    assert!(!dump.contains("Terminal: print"));
    assert_eq!(dump.lines().filter(|line| line.trim() == "Nonterminal: EXP_ST").count(), 1);
}

#[test]
fn test_error_report_points_at_token() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (parser, _) = parse_minic(BROKEN.to_string(), Some("broken.mc".to_string()));
    let report = render_error(&parser.syntax_errors()[0], BROKEN);
    let lines: Vec<&str> = report.lines().collect();

    assert!(lines[0].starts_with("Error: SyntaxError (Unexpected `int`, expected one of: "));
    assert_eq!(lines[1], "-> broken.mc");
    assert_eq!(lines[3], "1 | int first int second;");
    assert_eq!(lines[4], "  | ----------^");
    assert!(lines[5].starts_with("  = states: 0 "));
    assert_eq!(lines[6], "  = symbols: EOF dcl_spec %ident");
}

#[test]
fn test_fatal_errors_produce_no_tree() {
    let (_, result) = parse_minic("int main(void) { x = 1 foo(".to_string(), None);
    assert_eq!(result.unwrap_err().get_internal(), &ErrorImpl::UnexpectedEndOfInput);

    let (_, result) = parse_minic("int x = 99999999999999999999;".to_string(), None);
    assert_eq!(result.unwrap_err().get_error_name(), "NumberParseError");

    let (_, result) = parse_minic("int x; /* never closed".to_string(), None);
    assert_eq!(result.unwrap_err().get_internal(), &ErrorImpl::UnterminatedComment);
}

#[test]
fn test_empty_source_is_a_syntax_error() {
    let (parser, result) = parse_minic(String::new(), None);

    assert_eq!(parser.syntax_errors().len(), 1);
    assert_eq!(result.unwrap_err().get_internal(), &ErrorImpl::UnexpectedEndOfInput);
}
