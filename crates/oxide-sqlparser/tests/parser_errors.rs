//! Tests for parser error cases, depth limits and output stability.

mod common;
use common::*;

use oxide_sqlparser::{ParseContext, ParseError, Parser, ParserConfig, TokenKind, Tokenizer};

fn syntax(sql: &str) -> oxide_sqlparser::parser::Diagnostic {
    match parse_err(sql) {
        ParseError::Syntax(d) => d,
        other => panic!("Expected syntax error for {sql}, got {other:?}"),
    }
}

// ===================================================================
// Syntax errors
// ===================================================================

#[test]
fn error_reports_offending_token() {
    let d = syntax("select from t");
    assert_eq!(d.message, "syntax error");
    assert_eq!(d.position, 7);
    assert_eq!(d.near, "from");
    assert_eq!(d.token, TokenKind::FROM);
    assert_eq!(
        parse_err("select from t").to_string(),
        "syntax error at position 7 near 'from'"
    );
}

#[test]
fn error_empty_input() {
    let d = syntax("");
    assert!(d.at_eof());
    assert_eq!(d.position, 0);
    assert_eq!(d.to_string(), "syntax error at position 0 near end of input");
}

#[test]
fn error_incomplete_where() {
    let d = syntax("select a from t where");
    assert!(d.at_eof());
    assert_eq!(d.position, "select a from t where".len());
}

#[test]
fn error_unknown_statement() {
    let d = syntax("truncate users");
    assert_eq!(d.position, 0);
    assert_eq!(d.near, "truncate");
}

#[test]
fn error_trailing_semicolon() {
    let d = syntax("select a from t;");
    assert_eq!(d.near, ";");
}

#[test]
fn error_unclosed_paren() {
    let _ = parse_err("select (1 + 2 from t");
}

#[test]
fn error_missing_from() {
    let _ = parse_err("select a");
}

#[test]
fn error_bare_boolean_operand() {
    let _ = parse_err("select a from t where a and b");
}

#[test]
fn error_position_accessor() {
    assert_eq!(parse_err("select a frm t").position(), Some(13));
    assert_eq!(parse_err("select a frm t").diagnostics().len(), 1);
}

// ===================================================================
// Lexical errors
// ===================================================================

#[test]
fn error_unrecognized_character() {
    let err = parse_err("select a from t where a = 1 !");
    let ParseError::Lexical(d) = err else {
        panic!("expected lexical error, got {err:?}");
    };
    assert_eq!(d.message, "unrecognized token");
    assert_eq!(d.near, "!");
    assert_eq!(d.token, TokenKind::LEX_ERROR);
}

#[test]
fn error_digits_into_letters() {
    assert!(matches!(
        parse_err("select 12abc from t"),
        ParseError::Lexical(d) if d.near == "12abc"
    ));
}

#[test]
fn error_unterminated_string() {
    assert!(matches!(parse_err("select 'abc from t"), ParseError::Lexical(_)));
}

// ===================================================================
// Rejected lock clauses
// ===================================================================

#[test]
fn error_lock_expecting_share() {
    let err = parse_err("select a from t lock in shared mode");
    assert!(matches!(&err, ParseError::Semantic(d) if d.message == "expecting share"));
    assert_eq!(
        err.to_string(),
        "expecting share at position 24 near 'shared'"
    );
}

#[test]
fn error_lock_expecting_mode() {
    let err = parse_err("select a from t lock in share mood");
    let ParseError::Semantic(d) = err else {
        panic!("expected semantic error, got {err:?}");
    };
    assert_eq!(d.message, "expecting mode");
    assert_eq!(d.position, 30);
    assert_eq!(d.near, "mood");
}

// ===================================================================
// Depth limit
// ===================================================================

fn nested(depth: usize) -> String {
    format!("select {}1{} from t", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn depth_limit_rejects_deep_nesting() {
    let err = parse_err(&nested(300));
    assert_eq!(
        err,
        ParseError::DepthExceeded {
            limit: ParserConfig::default().max_depth.unwrap_or_default()
        }
    );
}

#[test]
fn depth_limit_allows_moderate_nesting() {
    let _ = parse(&nested(150));
}

#[test]
fn depth_limit_can_be_lifted() {
    let parser = Parser::new(ParserConfig::unbounded());
    assert!(parser.parse_str(&nested(300)).is_ok());
}

#[test]
fn unbounded_deep_expressions_render_and_drop() {
    let depth = 50_000;
    let sql = format!("select {}x{} from t", "-(".repeat(depth), ")".repeat(depth));
    let statement = Parser::new(ParserConfig::unbounded())
        .parse_str(&sql)
        .expect("deep negation parses");
    // The innermost `(x)` unwraps to a bare column.
    let expected = format!(
        "select {}-x{} from t",
        "-(".repeat(depth - 1),
        ")".repeat(depth - 1)
    );
    assert_eq!(statement.to_string(), expected);
    drop(statement);
}

#[test]
fn unbounded_deep_subqueries_render_and_drop() {
    let depth = 20_000;
    let sql = format!(
        "select a from t{} where a = 1{}",
        " where a in (select a from t".repeat(depth),
        ")".repeat(depth)
    );
    let statement = Parser::new(ParserConfig::unbounded())
        .parse_str(&sql)
        .expect("deep subqueries parse");
    assert_eq!(statement.to_string(), sql);
    drop(statement);
}

#[test]
fn depth_limit_is_configurable() {
    let parser = Parser::new(ParserConfig::default().with_max_depth(50));
    assert_eq!(
        parser.parse_str(&nested(100)),
        Err(ParseError::DepthExceeded { limit: 50 })
    );
    assert!(parser.parse_str(&nested(10)).is_ok());
}

// ===================================================================
// Context and stability
// ===================================================================

#[test]
fn failed_parse_leaves_diagnostics_on_context() {
    let mut ctx = ParseContext::new();
    let result = Parser::default().parse(&mut Tokenizer::new("select from t"), &mut ctx);
    assert!(result.is_err());
    assert_eq!(ctx.error_count(), 1);
    assert!(ctx.take_parse_tree().is_none());
}

#[test]
fn parsing_is_deterministic() {
    let sql = "select a, count(*) from t join u on t.id = u.id where a > 1 group by a";
    assert_eq!(parse(sql), parse(sql));
    assert_eq!(parse_err("select from"), parse_err("select from"));
}

#[test]
fn json_output() {
    let stmt = parse("select a from t where a = 1");
    let json = serde_json::to_value(&stmt).expect("serializes");
    let select = &json["select"];
    assert_eq!(select["distinct"], false);
    assert_eq!(select["select_exprs"][0]["non_star"]["expr"]["kind"], "ID");
    assert_eq!(select["select_exprs"][0]["non_star"]["expr"]["value"], "a");
    assert_eq!(select["from"][0]["aliased"]["expr"]["value"], "t");
    assert_eq!(select["where_clause"]["children"][0]["kind"], "=");
    assert!(select["group_by"].get("children").is_none());

    let err = serde_json::to_value(parse_err("select from t").diagnostics()).expect("serializes");
    assert_eq!(err[0]["near"], "from");
    assert_eq!(err[0]["position"], 7);
}
