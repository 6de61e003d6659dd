//! Show a data file the way generation will see it.

use spingen_core::config::types::ResolvedConfig;
use spingen_core::dataset::{load_path, Dataset};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::{InspectArgs, OutputFormat};

pub fn run(rc: &ResolvedConfig, args: &InspectArgs) {
    let dataset = match load_path(&args.data, &rc.load_options()) {
        Ok(d) => d,
        Err(e) => super::fail("inspect", e),
    };
    let limit = args.limit.unwrap_or(dataset.len()).min(dataset.len());

    match args.format {
        OutputFormat::Json => {
            let mut records = dataset.records();
            records.truncate(limit);
            match serde_json::to_string_pretty(&records) {
                Ok(json) => println!("{json}"),
                Err(e) => super::fail("inspect", e),
            }
        }
        OutputFormat::Text => {
            println!("{}", render_table(&dataset, limit));
            if limit < dataset.len() {
                println!(
                    "rows: {} (showing {limit}), columns: {}",
                    dataset.len(),
                    dataset.width()
                );
            } else {
                println!("rows: {}, columns: {}", dataset.len(), dataset.width());
            }
        }
    }
}

fn render_table(dataset: &Dataset, limit: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(dataset.columns().iter().cloned());
    for row in dataset.rows().take(limit) {
        builder.push_record(row.values().iter().cloned());
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
