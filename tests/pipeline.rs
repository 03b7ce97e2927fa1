use statica::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::parse_expression,
        reorder::reorder,
    },
};

/// Reorders an infix source and renders the prefix form as text.
fn prefix_text(source: &str) -> String {
    let tokens = tokenize(source).expect("tokenizing failed");
    reorder(&tokens).expect("reordering failed")
                    .iter()
                    .map(|(token, _)| token.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
}

fn parse(source: &str) -> Expr {
    let tokens = tokenize(source).expect("tokenizing failed");
    parse_expression(&tokens).expect("parsing failed")
}

fn parse_error(source: &str) -> ParseError {
    let tokens = tokenize(source).expect("tokenizing failed");
    parse_expression(&tokens).expect_err("parsing should have failed")
}

#[test]
fn reordering_honors_precedence() {
    assert_eq!(prefix_text("1 + 2 * 3"), "+ 1 * 2 3");
    assert_eq!(prefix_text("1 * 2 + 3"), "+ * 1 2 3");
    assert_eq!(prefix_text("1 + 2 + 3"), "+ 1 + 2 3");
}

#[test]
fn grouping_parentheses_are_dropped() {
    assert_eq!(prefix_text("(1 + 2) * 3"), "* + 1 2 3");
    assert_eq!(prefix_text("((1))"), "1");
}

#[test]
fn call_parentheses_and_brackets_are_retained() {
    assert_eq!(prefix_text("f(1, 2)"), "f ( , 1 2 )");
    assert_eq!(prefix_text("number[1, 2]"), "number [ , 1 2 ]");
    assert_eq!(prefix_text("input(number[])"), "input ( number [ ] )");
}

#[test]
fn index_is_left_associative() {
    // a#b#c must index (a#b) with c, unlike the right-associative rest.
    assert_eq!(prefix_text("a # b # c"), "# # a b c");
    let printed = parse("a # b # c").to_string();
    assert_eq!(printed, "((a # b) # c)");
}

#[test]
fn ternaries_nest_to_the_right() {
    assert_eq!(prefix_text("a ? b : c"), "? a : b c");
    let printed = parse("a ? b : c ? d : e").to_string();
    assert_eq!(printed, "(a ? b : (c ? d : e))");
}

#[test]
fn printed_expressions_reparse_structurally_equal() {
    for source in ["a ? b : c",
                   "1 + 2 * 3 # x",
                   "f(1, g(2, 3))",
                   "number[][number[1], number[]]",
                   "-(a < b) & @c",
                   "input(number[]) # 0"]
    {
        let parsed = parse(source);
        let reparsed = parse(&parsed.to_string());
        assert_eq!(parsed, reparsed, "round trip changed '{source}'");
    }
}

#[test]
fn greater_than_desugars_to_less_equal_and() {
    assert_eq!(parse("a > b"), parse("-(a < b) & -(a = b)"));
}

#[test]
fn token_text_reconstructs_the_token_sequence() {
    let source = "def f(x: number): number { return x + -1; }";
    let tokens = tokenize(source).expect("tokenizing failed");
    let reconstructed = tokens.iter()
                              .map(|(token, _)| token.to_string())
                              .collect::<Vec<_>>()
                              .join(" ");
    let retokenized = tokenize(&reconstructed).expect("retokenizing failed");
    assert_eq!(tokens, retokenized);
}

#[test]
fn tokenizer_reports_unmatchable_input() {
    assert!(tokenize("1 $ 2").is_err());
    assert!(tokenize("\"unterminated").is_err());
}

#[test]
fn lines_are_attached_to_tokens() {
    let tokens = tokenize("1 +\n2").expect("tokenizing failed");
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
    assert_eq!(lines, [1, 1, 2]);
}

#[test]
fn structural_mistakes_are_parse_errors() {
    assert!(matches!(parse_error("1, 2"), ParseError::MisplacedComma));
    assert!(matches!(parse_error("1 ? 2"), ParseError::MismatchedTernary));
    assert!(matches!(parse_error("1 : 2"), ParseError::MismatchedTernary));
    assert!(matches!(parse_error("(1 + 2"), ParseError::UnmatchedParenthesis { .. }));
    assert!(matches!(parse_error("number[1, 2"), ParseError::UnmatchedBracket { .. }));
    assert!(matches!(parse_error("1 2"), ParseError::TrailingTokens { .. }));
}
