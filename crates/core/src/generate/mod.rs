//! Generation runs: one template expanded many times.
//!
//! Two modes:
//! - simple: a fixed variable mapping, expanded a requested number of times
//! - dataset: one expansion per data row, the row supplying the variables
//!
//! Both refuse to run on a template that fails the syntax check.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::spintax::{self, SyntaxError, Variables};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid template: {0}")]
    Validation(#[from] SyntaxError),

    #[error("variation count must be at least 1")]
    ZeroCount,

    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

/// One generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variation {
    /// 1-based position in the run.
    pub index: usize,
    /// Row values that produced the text (dataset mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    pub text: String,
}

/// Expand `template` `count` times with the same variables.
pub fn generate_simple<R: Rng + ?Sized>(
    template: &str,
    vars: &Variables,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Variation>, GenerateError> {
    spintax::check(template)?;
    if count == 0 {
        return Err(GenerateError::ZeroCount);
    }

    let variations: Vec<Variation> = (1..=count)
        .map(|index| Variation {
            index,
            variables: None,
            text: spintax::expand(template, vars, rng),
        })
        .collect();

    info!(count = variations.len(), "generated variations");
    Ok(variations)
}

/// Expand `template` once per dataset row, in row order.
///
/// `selected` names the columns exposed as variables; empty means all.
pub fn generate_from_dataset<R: Rng + ?Sized>(
    template: &str,
    dataset: &Dataset,
    selected: &[String],
    rng: &mut R,
) -> Result<Vec<Variation>, GenerateError> {
    spintax::check(template)?;
    let columns = resolve_columns(dataset, selected)?;

    let variations: Vec<Variation> = dataset
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let vars = row.to_variables(&columns);
            let text = spintax::expand(template, &vars, rng);
            debug!(row = i + 1, "expanded row");
            Variation { index: i + 1, variables: Some(vars), text }
        })
        .collect();

    info!(
        count = variations.len(),
        columns = columns.len(),
        "generated variations from dataset"
    );
    Ok(variations)
}

/// The columns a dataset run will use: `selected` checked against the
/// dataset, or every column when `selected` is empty.
pub fn resolve_columns(
    dataset: &Dataset,
    selected: &[String],
) -> Result<Vec<String>, GenerateError> {
    if selected.is_empty() {
        return Ok(dataset.columns().to_vec());
    }
    for name in selected {
        if dataset.column_index(name).is_none() {
            return Err(GenerateError::UnknownColumn(name.clone()));
        }
    }
    Ok(selected.to_vec())
}

/// Template tokens that none of `available` provides.
///
/// These will pass through literally; hosts use this to warn.
pub fn unresolved_variables<S: AsRef<str>>(template: &str, available: &[S]) -> Vec<String> {
    spintax::variable_names(template)
        .into_iter()
        .filter(|name| !available.iter().any(|a| a.as_ref() == name))
        .collect()
}

/// The first `limit` variations.
pub fn preview(variations: &[Variation], limit: usize) -> &[Variation] {
    &variations[..limit.min(variations.len())]
}
