use crate::options::OptionValue;
use crate::types::{Diagnostic, IdentifierToken, StringToken, Token};

/// Capabilities a lint run exposes to rule handlers.
///
/// Handlers receive the host as `&mut dyn StyleHost`: options and the
/// run-scoped cache are read through it, diagnostics are reported through
/// it. Reporting never alters control flow, and nothing here can fail.
pub trait StyleHost {
    /// Look up an option by name. Absent means the rule is disabled.
    fn option(&self, name: &str) -> Option<OptionValue>;

    /// Read a run-scoped cache entry.
    fn cache(&self, key: &str) -> Option<&str>;

    /// Write a run-scoped cache entry.
    fn set_cache(&mut self, key: &str, value: &str);

    /// Report a diagnostic.
    fn warn(&mut self, diagnostic: Diagnostic);
}

/// Handler invoked once per identifier token.
pub type IdentifierHandler = Box<dyn Fn(&IdentifierToken, &mut dyn StyleHost)>;

/// Handler invoked once per string token.
pub type StringHandler = Box<dyn Fn(&StringToken, &mut dyn StyleHost)>;

/// Registry of rule handlers keyed by token kind.
///
/// Rule modules attach handlers at registration time; the host then
/// broadcasts each token to every handler subscribed to its kind, in
/// registration order. Handlers have no return value and cannot affect
/// dispatch.
#[derive(Default)]
pub struct RuleSet {
    identifier_handlers: Vec<IdentifierHandler>,
    string_handlers: Vec<StringHandler>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to identifier tokens.
    pub fn on_identifier<F>(&mut self, handler: F)
    where
        F: Fn(&IdentifierToken, &mut dyn StyleHost) + 'static,
    {
        self.identifier_handlers.push(Box::new(handler));
    }

    /// Subscribe a handler to string tokens.
    pub fn on_string<F>(&mut self, handler: F)
    where
        F: Fn(&StringToken, &mut dyn StyleHost) + 'static,
    {
        self.string_handlers.push(Box::new(handler));
    }

    /// Broadcast an identifier token to its subscribers.
    pub fn dispatch_identifier(&self, token: &IdentifierToken, host: &mut dyn StyleHost) {
        for handler in &self.identifier_handlers {
            handler(token, host);
        }
    }

    /// Broadcast a string token to its subscribers.
    pub fn dispatch_string(&self, token: &StringToken, host: &mut dyn StyleHost) {
        for handler in &self.string_handlers {
            handler(token, host);
        }
    }

    /// Broadcast a token to the handlers subscribed to its kind.
    pub fn dispatch(&self, token: &Token, host: &mut dyn StyleHost) {
        match token {
            Token::Identifier(t) => self.dispatch_identifier(t, host),
            Token::String(t) => self.dispatch_string(t, host),
        }
    }

    /// Total number of registered handlers across both token kinds.
    pub fn len(&self) -> usize {
        self.identifier_handlers.len() + self.string_handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifier_handlers.is_empty() && self.string_handlers.is_empty()
    }
}
