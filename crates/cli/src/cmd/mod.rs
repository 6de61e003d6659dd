//! Subcommand implementations.
//!
//! Each command prints `OK   spingen <cmd>` or `FAIL spingen <cmd>` and exits
//! with status 1 on failure.

pub mod batch;
pub mod doctor;
pub mod generate;
pub mod inspect;
pub mod output;
pub mod validate;

use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use spingen_core::config::loader::{default_config_path, ConfigLoader};
use spingen_core::config::types::ResolvedConfig;
use tracing::debug;

use crate::TemplateArgs;

/// Print the failure banner and the error, then exit with status 1.
pub fn fail(cmd: &str, err: impl Display) -> ! {
    println!("FAIL spingen {cmd}");
    println!("{err}");
    std::process::exit(1);
}

/// Load the configuration or fail the command.
pub fn load_config(
    config: Option<&Path>,
    profile: Option<&str>,
    cmd: &str,
) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL spingen {cmd}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Template text from `--template`, `--template-file` or stdin (`-`).
///
/// A single trailing line break of a template file is dropped.
pub fn read_template(args: &TemplateArgs) -> io::Result<String> {
    if let Some(text) = &args.template {
        return Ok(text.clone());
    }

    let mut text = match args.template_file.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Seeded generator when a seed is known, OS entropy otherwise.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
