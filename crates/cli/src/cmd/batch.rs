//! Dataset-mode generation: one variation per CSV row.

use spingen_core::config::types::ResolvedConfig;
use spingen_core::dataset::load_path;
use spingen_core::export::{self, DATASET_EXPORT_FILE};
use spingen_core::generate::{
    generate_from_dataset, preview, resolve_columns, unresolved_variables,
};
use spingen_core::spintax;
use tracing::warn;

use super::output::print_variations;
use crate::{BatchArgs, OutputFormat};

pub fn run(rc: &ResolvedConfig, args: &BatchArgs) {
    let template = match super::read_template(&args.template) {
        Ok(t) => t,
        Err(e) => super::fail("batch", format!("failed to read template: {e}")),
    };

    if let Err(e) = spintax::check(&template) {
        super::fail("batch", format!("invalid template: {e}"));
    }

    let dataset = match load_path(&args.data, &rc.load_options()) {
        Ok(d) => d,
        Err(e) => super::fail("batch", e),
    };
    let text_output = args.format == OutputFormat::Text;
    if text_output {
        println!(
            "loaded: {} (rows: {}, columns: {})",
            args.data.display(),
            dataset.len(),
            dataset.width()
        );
    }

    let columns = match resolve_columns(&dataset, &args.columns) {
        Ok(c) => c,
        Err(e) => super::fail("batch", e),
    };
    for name in unresolved_variables(&template, &columns) {
        warn!(variable = %name, "no selected column provides this token");
    }

    let mut rng = super::build_rng(args.seed.or(rc.seed));
    let variations = match generate_from_dataset(&template, &dataset, &columns, &mut rng) {
        Ok(v) => v,
        Err(e) => super::fail("batch", e),
    };

    let limit = args.preview.or(rc.preview_limit).unwrap_or(variations.len());
    if let Err(e) = print_variations(preview(&variations, limit), variations.len(), args.format)
    {
        super::fail("batch", e);
    }

    if args.no_export {
        return;
    }
    let path = args.output.clone().unwrap_or_else(|| rc.export_path(DATASET_EXPORT_FILE));
    if let Err(e) = export::export_csv_file(&path, &variations, &columns) {
        super::fail("batch", e);
    }
    if text_output {
        println!("exported: {}", path.display());
    }
}
