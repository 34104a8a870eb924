//! Token-level style rules for strake.
//!
//! Inspects identifier and string tokens delivered by the host lint run and
//! produces diagnostics:
//! - W103: forbidden `__proto__` property name
//! - W104: forbidden `__iterator__` property name
//! - W105: dangling underscore in identifier
//! - W106: identifier not camelCase
//! - W108: expected double-quoted string
//! - W109: expected single-quoted string
//! - W110: inconsistent quote style vs. first-seen

pub mod rules;
