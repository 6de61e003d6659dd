//! Pre-flight syntax check for spintax templates.
//!
//! This is advisory: it catches the common mistakes before a generation run
//! but is not a full grammar. A stray `[` inside a later, properly closed
//! group still passes.

use thiserror::Error;

use super::engine::spin_groups;

/// Message returned by [`validate`] for a template that passes every rule.
pub const VALID_MESSAGE: &str = "syntax is valid";

/// Reasons a template is refused. Rules are checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("template is empty")]
    Empty,

    #[error("brackets are unbalanced")]
    UnbalancedBrackets { open: usize, close: usize },

    /// A group whose options are all empty or whitespace. `offset` is the
    /// byte position of its opening bracket.
    #[error("a spin group has no valid option")]
    BlankSpinGroup { offset: usize },
}

/// Check a template, returning the first failed rule.
pub fn check(template: &str) -> Result<(), SyntaxError> {
    if template.trim().is_empty() {
        return Err(SyntaxError::Empty);
    }

    let open = template.matches('[').count();
    let close = template.matches(']').count();
    if open != close {
        return Err(SyntaxError::UnbalancedBrackets { open, close });
    }

    if let Some(group) = spin_groups(template).iter().find(|g| g.is_blank()) {
        return Err(SyntaxError::BlankSpinGroup { offset: group.span.start });
    }

    Ok(())
}

/// Verdict plus a user-facing message.
pub fn validate(template: &str) -> (bool, String) {
    match check(template) {
        Ok(()) => (true, VALID_MESSAGE.to_string()),
        Err(e) => (false, e.to_string()),
    }
}
