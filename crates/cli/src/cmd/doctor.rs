use spingen_core::config::loader::default_config_path;
use spingen_core::config::types::ResolvedConfig;

pub fn run(rc: &ResolvedConfig) {
    println!("OK   spingen doctor");
    match &rc.source {
        Some(path) => println!("path: {}", path.display()),
        None => println!(
            "path: (none, defaults in use; looked for {})",
            default_config_path().display()
        ),
    }
    println!("profile: {}", rc.active_profile);
    println!("export_dir: {}", rc.export_dir.display());
    println!("count: {}", rc.count);
    println!(
        "preview_limit: {}",
        rc.preview_limit.map_or_else(|| "all".to_string(), |n| n.to_string())
    );
    println!("delimiter: {}", display_delimiter(rc.delimiter));
    println!("max_file_size: {} bytes", rc.max_file_size);
    println!("seed: {}", rc.seed.map_or_else(|| "random".to_string(), |s| s.to_string()));
    println!("logging.level: {}", rc.logging.level);
    if let Some(file) = &rc.logging.file {
        println!("logging.file:  {}", file.display());
    }
}

fn display_delimiter(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "\\t".to_string(),
        b => char::from(b).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_delimiter() {
        assert_eq!(display_delimiter(b';'), ";");
        assert_eq!(display_delimiter(b'\t'), "\\t");
    }
}
