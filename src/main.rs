use anyhow::Result;
use casefmt::cli::output::OutputFormat;
use casefmt::config::ConfigLayer;
use casefmt::parser::{self, InputFormat};
use casefmt::{cli, Config, Style};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "casefmt")]
#[command(version, about = "Convert text into camelCase, kebab-case, dot.case or snake_case", long_about = None)]
struct Cli {
    /// Inputs to convert (reads stdin when no inputs or files are given)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style (camel, kebab, dot, snake)
    #[arg(short, long)]
    style: Option<Style>,

    /// Render every style for each input
    #[arg(long, conflicts_with = "style")]
    all_styles: bool,

    /// Fail on inputs that are neither strings nor numbers
    #[arg(long)]
    strict: bool,

    /// Coerce every input to text, even if a config file enables strict mode
    #[arg(long, conflicts_with = "strict")]
    no_strict: bool,

    /// Read inputs from a file, one per line (repeatable)
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Parse every input as a JSON value
    #[arg(long)]
    json_input: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Show the token sequence next to each result
    #[arg(long)]
    tokens: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs failed
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the global and local config file locations
    Path,
    /// Write a default .casefmt.toml in the current directory
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casefmt", &mut io::stdout());
        return Ok(());
    }

    let overrides = ConfigLayer {
        style: cli.style,
        strict: match (cli.strict, cli.no_strict) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        json_input: cli.json_input.then_some(true),
        color: cli.no_color.then_some(false),
    };

    if let Some(command) = cli.command {
        return handle_command(command, &overrides);
    }

    let config = Config::load(&overrides)?;
    tracing::debug!(?config, "effective configuration");

    let records = collect_inputs(&cli, &config)?;

    let styles: Vec<Style> = if cli.all_styles {
        Style::ALL.to_vec()
    } else {
        vec![config.style]
    };

    let conversions = cli::run_conversions(&records, &styles, &config.options(), cli.tokens);
    let failed = cli::failure_count(&conversions);

    cli::output::print_conversions(&conversions, config.color, cli.all_styles, &cli.format)?;
    if cli.format == OutputFormat::Text {
        cli::output::print_summary(failed, conversions.len(), config.color);
    }

    if failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn collect_inputs(cli: &Cli, config: &Config) -> Result<Vec<parser::InputRecord>> {
    let format = if config.json_input {
        InputFormat::Json
    } else {
        InputFormat::Plain
    };

    if cli.inputs.is_empty() && cli.files.is_empty() {
        return parser::parse_stdin(format);
    }

    let mut records = parser::parse_args(&cli.inputs, format)?;
    for file_path in &cli.files {
        if !file_path.exists() {
            anyhow::bail!("File not found: {}", file_path.display());
        }
        records.extend(parser::parse_file(file_path, config.json_input)?);
    }

    Ok(records)
}

fn handle_command(command: Commands, overrides: &ConfigLayer) -> Result<()> {
    match command {
        Commands::Config { action } => match action {
            ConfigCommands::Show => {
                let config = Config::load(overrides)?;
                print!("{}", config.to_toml()?);
            }
            ConfigCommands::Path => {
                match Config::global_config_path() {
                    Some(path) => println!("global: {}", path.display()),
                    None => println!("global: (unavailable)"),
                }
                println!("local:  {}", Config::local_config_path().display());
            }
            ConfigCommands::Init => {
                let path = Config::local_config_path();
                Config::default().write_new(&path)?;
                println!("Wrote {}", path.display());
            }
        },
    }
    Ok(())
}
