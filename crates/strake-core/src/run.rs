//! Per-invocation lint state.

use std::collections::HashMap;

use crate::host::StyleHost;
use crate::options::{OptionValue, RuleOptions};
use crate::types::Diagnostic;

/// Run-scoped key/value cache.
///
/// Lives for exactly one lint invocation over one source unit: created
/// empty at run start, discarded at run end. Rules use it to remember
/// cross-token state; the quote-consistency check's `"quotmark"` entry is
/// written once and then only read for the rest of the run.
#[derive(Debug, Default)]
pub struct RunCache {
    entries: HashMap<String, String>,
}

impl RunCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// One lint invocation over one source unit.
///
/// Owns the option set, a fresh cache, and the diagnostics collected so
/// far. Constructing a new `LintRun` per invocation is what keeps re-runs
/// independent: no rule state survives outside this struct, and concurrent
/// runs over different source units cannot interfere.
#[derive(Debug)]
pub struct LintRun {
    options: RuleOptions,
    cache: RunCache,
    diagnostics: Vec<Diagnostic>,
}

impl LintRun {
    pub fn new(options: RuleOptions) -> Self {
        Self {
            options,
            cache: RunCache::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Diagnostics collected so far, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the run, yielding its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl StyleHost for LintRun {
    fn option(&self, name: &str) -> Option<OptionValue> {
        self.options.get(name)
    }

    fn cache(&self, key: &str) -> Option<&str> {
        self.cache.get(key)
    }

    fn set_cache(&mut self, key: &str, value: &str) {
        self.cache.set(key, value);
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
