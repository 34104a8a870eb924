use strake_core::host::{RuleSet, StyleHost};
use strake_core::options::OptionValue;
use strake_core::types::{Diagnostic, IdentifierToken, QuoteMark, StringToken};

/// Cache key under which the quote-consistency check remembers the first
/// quote style it sees. Written at most once per run.
const QUOTMARK_CACHE_KEY: &str = "quotmark";

/// Attach the five style checks to a rule set.
///
/// Handlers are independent: none calls another, each decides on its own
/// whether to read options and report, and the only shared state is the run
/// cache entry used by the quote-consistency check.
pub fn register(rules: &mut RuleSet) {
    rules.on_identifier(check_proto);
    rules.on_identifier(check_iterator);
    rules.on_identifier(check_dangling_underscore);
    rules.on_identifier(check_camel_case);
    rules.on_string(check_quotes);
}

fn enabled(host: &dyn StyleHost, name: &str) -> bool {
    host.option(name).is_some_and(|v| v.is_truthy())
}

/// W103: use of the `__proto__` name. The property was deprecated and then
/// re-introduced for ES6; flagged unless the `proto` option allows it.
fn check_proto(token: &IdentifierToken, host: &mut dyn StyleHost) {
    if enabled(host, "proto") {
        return;
    }

    if token.name == "__proto__" {
        host.warn(Diagnostic {
            code: "W103".to_string(),
            line: token.line,
            column: token.column,
            data: vec![token.name.clone()],
        });
    }
}

/// W104: use of the `__iterator__` name, available only in browsers with a
/// JavaScript 1.7 implementation. Flagged unless the `iterator` option
/// allows it.
fn check_iterator(token: &IdentifierToken, host: &mut dyn StyleHost) {
    if enabled(host, "iterator") {
        return;
    }

    if token.name == "__iterator__" {
        host.warn(Diagnostic {
            code: "W104".to_string(),
            line: token.line,
            column: token.column,
            data: vec![token.name.clone()],
        });
    }
}

/// W105: dangling underscore. Active only under the `nomen` option.
/// The placeholder name `_` is always fine; under the `node` option, bound
/// `__dirname`/`__filename` are fine too.
fn check_dangling_underscore(token: &IdentifierToken, host: &mut dyn StyleHost) {
    if !enabled(host, "nomen") {
        return;
    }

    // Conventional placeholder.
    if token.name == "_" {
        return;
    }

    // Node globals, but only as bound names; in property-access position
    // the name belongs to some other object and is still flagged.
    if enabled(host, "node")
        && !token.is_property
        && (token.name == "__dirname" || token.name == "__filename")
    {
        return;
    }

    if token.name.starts_with('_') || token.name.ends_with('_') {
        host.warn(Diagnostic {
            code: "W105".to_string(),
            line: token.line,
            // Reported at the start offset, not the display column.
            column: token.from,
            data: vec!["dangling '_'".to_string(), token.name.clone()],
        });
    }
}

/// W106: identifier not in camelCase. Active only under the `camelcase`
/// option. Names that are entirely `[A-Z0-9_]` (constants like `MY_VAR`)
/// are exempt, as is a leading underscore run (`_myVar`).
fn check_camel_case(token: &IdentifierToken, host: &mut dyn StyleHost) {
    if !enabled(host, "camelcase") {
        return;
    }

    let stripped = token.name.trim_start_matches('_');
    let all_caps = token
        .name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

    if stripped.contains('_') && !all_caps {
        host.warn(Diagnostic {
            code: "W106".to_string(),
            line: token.line,
            column: token.from,
            data: vec![token.name.clone()],
        });
    }
}

/// W108/W109/W110: quote-style consistency. The `quotmark` option selects
/// the mode: a fixed style (`"single"`/`"double"`), or match-first, where
/// the first literal of the run sets the expected style for the rest of it.
fn check_quotes(token: &StringToken, host: &mut dyn StyleHost) {
    let Some(quotmark) = host.option("quotmark") else {
        return;
    };

    let mut code = None;

    match quotmark {
        OptionValue::Str(style) if style == "single" => {
            if token.quote != QuoteMark::Single {
                code = Some("W109");
            }
        }
        OptionValue::Str(style) if style == "double" => {
            if token.quote != QuoteMark::Double {
                code = Some("W108");
            }
        }
        OptionValue::Bool(true) => {
            // First literal wins: latch its quote style, then compare every
            // literal (this one included) against the latch. The latch is
            // never overwritten for the rest of the run.
            if host.cache(QUOTMARK_CACHE_KEY).is_none() {
                host.set_cache(QUOTMARK_CACHE_KEY, token.quote.as_str());
            }

            if host.cache(QUOTMARK_CACHE_KEY) != Some(token.quote.as_str()) {
                code = Some("W110");
            }
        }
        _ => {}
    }

    if let Some(code) = code {
        host.warn(Diagnostic {
            code: code.to_string(),
            line: token.line,
            column: token.column,
            data: vec![],
        });
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
