//! Interactive prompts for variable values of simple runs.
//!
//! Tokens in the template that were not given with `--var` are asked for
//! when stdin is a terminal. An empty answer, batch mode, or a
//! non-interactive stdin leaves the token in the output as written.

use dialoguer::{theme::ColorfulTheme, Input};
use spingen_core::spintax::{variable_names, Variables};
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt.
    pub batch_mode: bool,
}

/// Result of variable collection.
#[derive(Debug)]
pub struct CollectedVars {
    /// Provided values first, then prompted ones in template order.
    pub values: Variables,
    /// Tokens that remain unresolved.
    pub unresolved: Vec<String>,
}

/// Error type for variable collection.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Fill in values for the template's tokens that `provided` lacks.
pub fn collect_variables(
    template: &str,
    provided: &Variables,
    options: &PromptOptions,
) -> Result<CollectedVars, PromptError> {
    let is_interactive = io::stdin().is_terminal() && !options.batch_mode;
    collect_with(template, provided, |name| {
        if is_interactive {
            prompt_value(name).map(Some)
        } else {
            Ok(None)
        }
    })
}

fn collect_with<F>(
    template: &str,
    provided: &Variables,
    mut ask: F,
) -> Result<CollectedVars, PromptError>
where
    F: FnMut(&str) -> Result<Option<String>, PromptError>,
{
    let mut values = provided.clone();
    let mut unresolved = Vec::new();

    for name in variable_names(template) {
        if values.contains(&name) {
            continue;
        }
        match ask(&name)? {
            Some(value) if !value.is_empty() => {
                values.insert(name, value);
            }
            _ => unresolved.push(name),
        }
    }

    Ok(CollectedVars { values, unresolved })
}

fn prompt_value(name: &str) -> Result<String, PromptError> {
    let theme = ColorfulTheme::default();
    Input::<String>::with_theme(&theme)
        .with_prompt(format!("{{{name}}}"))
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse a `--var` argument of the form `name=value`.
///
/// The name is everything before the first `=`, so values may contain `=`.
pub fn parse_var(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, _)) if name.is_empty() => {
            Err(format!("missing variable name in '{arg}'"))
        }
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected name=value, got '{arg}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var("city=Lyon"), Ok(("city".into(), "Lyon".into())));
        assert_eq!(parse_var("empty="), Ok(("empty".into(), String::new())));
        assert_eq!(parse_var("eq=a=b"), Ok(("eq".into(), "a=b".into())));
        assert_eq!(
            parse_var("Nombre de villes=12"),
            Ok(("Nombre de villes".into(), "12".into()))
        );
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn test_collect_skips_provided_and_keeps_order() {
        let provided: Variables = [("b", "2")].into_iter().collect();
        let mut asked = Vec::new();
        let collected = collect_with("{a} {b} {c}", &provided, |name| {
            asked.push(name.to_string());
            Ok(Some(format!("<{name}>")))
        })
        .unwrap();

        assert_eq!(asked, vec!["a", "c"]);
        assert_eq!(collected.values.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert!(collected.unresolved.is_empty());
    }

    #[test]
    fn test_collect_empty_answer_leaves_token() {
        let collected =
            collect_with("{a} {b}", &Variables::new(), |name| {
                Ok((name == "a").then(|| "x".to_string()))
            })
            .unwrap();
        assert_eq!(collected.values.get("a"), Some("x"));
        assert_eq!(collected.unresolved, vec!["b"]);
    }

    #[test]
    fn test_collect_propagates_cancel() {
        let err = collect_with("{a}", &Variables::new(), |_| Err(PromptError::Cancelled))
            .unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
    }
}
