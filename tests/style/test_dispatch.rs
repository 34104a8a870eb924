// Tests for event dispatch: kind isolation and run independence.
use strake_core::options::{QuotemarkPolicy, RuleOptions};
use strake_core::run::LintRun;
use strake_core::types::{QuoteMark, Token, TokenKind};

use crate::common::{codes, identifier, lint, rule_set, string};

fn everything_on() -> RuleOptions {
    RuleOptions {
        proto: false, // W103/W104 are opt-out, not opt-in
        iterator: false,
        nomen: true,
        node: true,
        camelcase: true,
        quotmark: QuotemarkPolicy::MatchFirst,
    }
}

#[test]
fn test_identifier_stream_never_yields_quote_codes() {
    let tokens = vec![
        identifier("__proto__", 1, 1, 1),
        identifier("my_var", 2, 1, 1),
        identifier("temp_", 3, 1, 1),
    ];
    let diagnostics = lint(everything_on(), &tokens);
    assert!(diagnostics
        .iter()
        .all(|d| !matches!(d.code.as_str(), "W108" | "W109" | "W110")));
}

#[test]
fn test_string_stream_never_yields_identifier_codes() {
    let tokens = vec![
        string(1, 1, QuoteMark::Double),
        string(2, 1, QuoteMark::Single),
    ];
    let diagnostics = lint(everything_on(), &tokens);
    assert_eq!(codes(&diagnostics), vec!["W110"]);
}

#[test]
fn test_mixed_stream_interleaves_in_token_order() {
    let tokens = vec![
        string(1, 1, QuoteMark::Double),
        identifier("__proto__", 2, 1, 1),
        string(3, 1, QuoteMark::Single),
    ];
    let diagnostics = lint(everything_on(), &tokens);
    assert_eq!(codes(&diagnostics), vec!["W103", "W110"]);
}

#[test]
fn test_token_kind_classification() {
    assert_eq!(identifier("x", 1, 1, 1).kind(), TokenKind::Identifier);
    assert_eq!(string(1, 1, QuoteMark::Single).kind(), TokenKind::String);
    assert_eq!(TokenKind::Identifier.as_str(), "identifier");
    assert_eq!(TokenKind::String.as_str(), "string");
}

#[test]
fn test_one_token_at_most_one_diagnostic_per_rule() {
    // A name that trips both the dangling-underscore and camelCase checks
    // yields exactly one diagnostic from each.
    let diagnostics = lint(everything_on(), &[identifier("_bad_name_", 1, 1, 1)]);
    assert_eq!(codes(&diagnostics), vec!["W105", "W106"]);
}

#[test]
fn test_runs_share_no_state() {
    let rules = rule_set();
    let tokens: Vec<Token> = vec![
        string(1, 1, QuoteMark::Double),
        string(2, 1, QuoteMark::Single),
    ];

    let mut first = LintRun::new(everything_on());
    let mut second = LintRun::new(everything_on());
    for token in &tokens {
        rules.dispatch(token, &mut first);
    }
    // The second run sees the same tokens but its own empty cache.
    for token in &tokens {
        rules.dispatch(token, &mut second);
    }
    assert_eq!(codes(first.diagnostics()), codes(second.diagnostics()));
}
