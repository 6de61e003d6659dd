//! Validate command implementation.

use serde::Serialize;
use spingen_core::spintax::{self, SyntaxError};

use crate::{OutputFormat, ValidateArgs};

/// Machine-readable validation report.
#[derive(Debug, Serialize)]
struct Report {
    valid: bool,
    message: String,
    spin_groups: usize,
    combinations: u128,
    variables: Vec<String>,
}

impl Report {
    fn new(template: &str) -> Self {
        let (valid, message) = spintax::validate(template);
        Self {
            valid,
            message,
            spin_groups: spintax::spin_groups(template).len(),
            combinations: spintax::combinations(template),
            variables: spintax::variable_names(template),
        }
    }
}

pub fn run(args: &ValidateArgs) {
    let template = match super::read_template(&args.template) {
        Ok(t) => t,
        Err(e) => super::fail("validate", format!("failed to read template: {e}")),
    };

    let report = Report::new(&template);

    match args.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => super::fail("validate", e),
        },
        OutputFormat::Text => print_text(&template, &report),
    }

    if !report.valid {
        std::process::exit(1);
    }
}

fn print_text(template: &str, report: &Report) {
    if !report.valid {
        println!("FAIL spingen validate");
        println!("{}", report.message);
        if let Some(detail) = spintax::check(template).err().and_then(|e| detail(&e)) {
            println!("{detail}");
        }
        return;
    }

    println!("OK   spingen validate");
    println!("{}", report.message);
    println!("spin groups: {}", report.spin_groups);
    println!("combinations: {}", report.combinations);
    if report.variables.is_empty() {
        println!("variables: (none)");
    } else {
        println!("variables: {}", report.variables.join(", "));
    }
}

fn detail(err: &SyntaxError) -> Option<String> {
    match err {
        SyntaxError::Empty => None,
        SyntaxError::UnbalancedBrackets { open, close } => {
            Some(format!("found {open} '[' and {close} ']'"))
        }
        SyntaxError::BlankSpinGroup { offset } => {
            Some(format!("blank group starts at byte {offset}"))
        }
    }
}
