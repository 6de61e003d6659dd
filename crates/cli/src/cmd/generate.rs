//! Simple-mode generation: one template, fixed variables, N variations.

use spingen_core::config::types::ResolvedConfig;
use spingen_core::export;
use spingen_core::generate::generate_simple;
use spingen_core::spintax::{self, Variables};
use tracing::warn;

use super::output::print_variations;
use crate::prompt::{collect_variables, PromptOptions};
use crate::{GenerateArgs, OutputFormat};

pub fn run(rc: &ResolvedConfig, args: &GenerateArgs) {
    let template = match super::read_template(&args.template) {
        Ok(t) => t,
        Err(e) => super::fail("generate", format!("failed to read template: {e}")),
    };

    // Refuse before asking for any variable value
    if let Err(e) = spintax::check(&template) {
        super::fail("generate", format!("invalid template: {e}"));
    }

    let provided: Variables = args.vars.iter().cloned().collect();
    let options = PromptOptions { batch_mode: args.batch };
    let collected = match collect_variables(&template, &provided, &options) {
        Ok(c) => c,
        Err(e) => super::fail("generate", e),
    };
    for name in &collected.unresolved {
        warn!(variable = %name, "no value given, token left as written");
    }

    let count = args.count.unwrap_or(rc.count);
    let mut rng = super::build_rng(args.seed.or(rc.seed));

    let variations = match generate_simple(&template, &collected.values, count, &mut rng) {
        Ok(v) => v,
        Err(e) => super::fail("generate", e),
    };

    if let Err(e) = print_variations(&variations, variations.len(), args.format) {
        super::fail("generate", e);
    }

    if let Some(path) = &args.output {
        if let Err(e) = export::export_csv_file(path, &variations, &[]) {
            super::fail("generate", e);
        }
        if args.format == OutputFormat::Text {
            println!("exported: {}", path.display());
        }
    }
}
