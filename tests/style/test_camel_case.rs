// Tests for W106 camelCase enforcement.
use strake_core::options::RuleOptions;

use crate::common::{codes, identifier, lint};

fn camelcase() -> RuleOptions {
    RuleOptions {
        camelcase: true,
        ..RuleOptions::default()
    }
}

#[test]
fn test_disabled_by_default() {
    assert!(lint(RuleOptions::default(), &[identifier("my_var", 1, 1, 1)]).is_empty());
}

#[test]
fn test_w106_fires_for_snake_case() {
    let diagnostics = lint(camelcase(), &[identifier("my_var", 2, 6, 4)]);
    assert_eq!(codes(&diagnostics), vec!["W106"]);
    assert_eq!(diagnostics[0].line, 2);
    // Start offset, matching the dangling-underscore check.
    assert_eq!(diagnostics[0].column, 4);
    assert_eq!(diagnostics[0].data, vec!["my_var".to_string()]);
}

#[test]
fn test_screaming_snake_case_exempt() {
    let tokens = vec![
        identifier("MY_VAR", 1, 1, 1),
        identifier("HTTP2_SERVER", 2, 1, 1),
        identifier("_PRIVATE_CONST", 3, 1, 1),
    ];
    assert!(lint(camelcase(), &tokens).is_empty());
}

#[test]
fn test_leading_underscore_camel_case_exempt() {
    let tokens = vec![
        identifier("_myVar", 1, 1, 1),
        identifier("__cached", 2, 1, 1),
        identifier("plainCamel", 3, 1, 1),
    ];
    assert!(lint(camelcase(), &tokens).is_empty());
}

#[test]
fn test_one_diagnostic_per_token() {
    // Several offending underscores still produce a single diagnostic.
    let diagnostics = lint(camelcase(), &[identifier("my__Var_x", 1, 1, 1)]);
    assert_eq!(codes(&diagnostics), vec!["W106"]);
}

#[test]
fn test_mixed_case_with_internal_underscore_fires() {
    let diagnostics = lint(camelcase(), &[identifier("_my_Var", 1, 1, 1)]);
    assert_eq!(codes(&diagnostics), vec!["W106"]);
}
