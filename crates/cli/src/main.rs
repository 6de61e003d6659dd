mod cmd;
mod completions;
mod logging;
mod prompt;
mod tui;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "spingen",
    version,
    about = "Generate text variations from spintax templates and CSV data"
)]
pub struct Cli {
    /// Config file (default: ~/.config/spingen/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile to use instead of the config file's default
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved profile values
    Doctor,

    /// Check template syntax and report its spin groups and variables
    Validate(ValidateArgs),

    /// Expand a template several times with fixed variables
    Generate(GenerateArgs),

    /// Expand a template once per row of a CSV data file
    Batch(BatchArgs),

    /// Load a CSV data file and show it after normalisation
    Inspect(InspectArgs),

    /// Open the interactive terminal editor
    Interactive,

    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Doctor => "doctor",
            Commands::Validate(_) => "validate",
            Commands::Generate(_) => "generate",
            Commands::Batch(_) => "batch",
            Commands::Inspect(_) => "inspect",
            Commands::Interactive => "interactive",
            Commands::Completions { .. } => "completions",
        }
    }
}

/// Where the template text comes from.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct TemplateArgs {
    /// Template text, e.g. "[Hello|Hi] {name}"
    #[arg(short, long)]
    pub template: Option<String>,

    /// Read the template from a file ("-" for stdin)
    #[arg(short = 'f', long)]
    pub template_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Number of variations (default: profile count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Variable value as name=value (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = prompt::parse_var)]
    pub vars: Vec<(String, String)>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never prompt for missing variables
    #[arg(long)]
    pub batch: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Also write the variations to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// `;`-separated CSV file whose columns provide the variables
    #[arg(short, long)]
    pub data: PathBuf,

    /// Column to use as a variable (repeatable, default: all)
    #[arg(short, long = "column", value_name = "NAME")]
    pub columns: Vec<String>,

    #[command(flatten)]
    pub template: TemplateArgs,

    /// Number of variations to print (default: profile preview_limit, else all)
    #[arg(long)]
    pub preview: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// CSV export path (default: <export_dir>/variations_full.csv)
    #[arg(short, long, conflicts_with = "no_export")]
    pub output: Option<PathBuf>,

    /// Print only, do not write the CSV export
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// `;`-separated CSV file to load
    #[arg(short, long)]
    pub data: PathBuf,

    /// Maximum number of rows to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

fn main() {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        completions::run(shell);
        return;
    }

    let name = cli.command.name();
    let rc = cmd::load_config(cli.config.as_deref(), cli.profile.as_deref(), name);
    let interactive = matches!(cli.command, Commands::Interactive);
    let _log_guard = logging::init(&rc, cli.verbose, !interactive);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&rc),
        Commands::Validate(args) => cmd::validate::run(&args),
        Commands::Generate(args) => cmd::generate::run(&rc, &args),
        Commands::Batch(args) => cmd::batch::run(&rc, &args),
        Commands::Inspect(args) => cmd::inspect::run(&rc, &args),
        Commands::Interactive => {
            if let Err(e) = color_eyre::install().and_then(|()| tui::run(rc)) {
                eprintln!("Error: {e:?}");
                std::process::exit(1);
            }
        }
        Commands::Completions { .. } => unreachable!("handled before config loading"),
    }
}
