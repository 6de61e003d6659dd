use std::ops::Range;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use super::variables::Variables;

// `[`, then the shortest run of characters up to the next `]`.
// `.` does not cross newlines, so a group never spans lines.
static SPIN_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

static VARIABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// One bracketed alternative list found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinGroup<'a> {
    /// Byte range of the whole group, brackets included.
    pub span: Range<usize>,
    /// Text between the brackets.
    pub interior: &'a str,
    /// Interior split on `|`. Never empty: `[]` yields a single empty option.
    pub options: Vec<&'a str>,
}

impl SpinGroup<'_> {
    /// True when every option is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.options.iter().all(|opt| opt.trim().is_empty())
    }
}

/// Expand a template: substitute variables, then resolve spin groups.
///
/// Tokens whose name is absent from `vars` are left as-is. A value that
/// contains `[`, `]`, `{` or `}` is inserted literally and never rescanned
/// for variables; it does take part in spin resolution since that pass runs
/// over the substituted text.
pub fn expand<R: Rng + ?Sized>(template: &str, vars: &Variables, rng: &mut R) -> String {
    let substituted = substitute_variables(template, vars);
    expand_no_variables(&substituted, rng)
}

/// Resolve spin groups only.
///
/// Each group is resolved independently and uniformly at random in a single
/// left-to-right pass. Unbalanced brackets are left untouched.
pub fn expand_no_variables<R: Rng + ?Sized>(template: &str, rng: &mut R) -> String {
    SPIN_GROUP_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let interior = caps.get(1).map_or("", |m| m.as_str());
            let options: Vec<&str> = interior.split('|').collect();
            let idx = rng.gen_range(0..options.len());
            options[idx].to_string()
        })
        .into_owned()
}

/// Replace every `{name}` token whose name is in `vars`.
///
/// Single pass over the template: substituted values are not scanned again,
/// so a value containing `{other}` stays literal. When several entries could
/// match at the same position, the first one in declaration order is used.
pub fn substitute_variables(template: &str, vars: &Variables) -> String {
    if vars.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        match vars.iter().find(|(name, _)| token_at(tail, name)) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Whether `tail` (which starts with `{`) begins with the token `{name}`.
fn token_at(tail: &str, name: &str) -> bool {
    tail[1..].strip_prefix(name).is_some_and(|after| after.starts_with('}'))
}

/// All spin groups the expander would resolve, in template order.
pub fn spin_groups(template: &str) -> Vec<SpinGroup<'_>> {
    SPIN_GROUP_RE
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let interior = caps.get(1)?.as_str();
            Some(SpinGroup {
                span: whole.range(),
                interior,
                options: interior.split('|').collect(),
            })
        })
        .collect()
}

/// Distinct variable names referenced by `{name}` tokens, first appearance first.
pub fn variable_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in VARIABLE_RE.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Number of distinct spin outcomes (product of option counts), saturating.
///
/// Duplicate options within a group are counted separately.
pub fn combinations(template: &str) -> u128 {
    spin_groups(template)
        .iter()
        .fold(1u128, |acc, group| acc.saturating_mul(group.options.len() as u128))
}
