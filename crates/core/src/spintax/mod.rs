//! Spintax expansion and syntax checking.
//!
//! A template mixes two kinds of markup:
//! - Variable tokens: `{name}`, replaced by plain substitution
//! - Spin groups: `[a|b|c]`, replaced by one option chosen at random
//!
//! Variables are substituted first, so a spin group may contain a token.
//! Neither pass rescans the text it produces.

pub mod engine;
pub mod validation;
pub mod variables;

pub use engine::{
    SpinGroup, combinations, expand, expand_no_variables, spin_groups,
    substitute_variables, variable_names,
};
pub use validation::{SyntaxError, VALID_MESSAGE, check, validate};
pub use variables::Variables;
