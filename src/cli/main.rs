//! json-schema-gen - infer a JSON Schema from a sample JSON document

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use json_schema_generator::cli::CliError;
use json_schema_generator::cli::commands::generate::{GenerateArgs, handle_generate};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ItemsMode {
    /// Deduplicated item schemas under `items.anyOf`
    AsAnyOf,
    /// One item schema per array element
    AsList,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Pretty,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "json-schema-gen", version, about = "Infer a JSON Schema from a sample JSON document")]
struct Cli {
    /// Input JSON file (`-` or omitted reads stdin)
    input: Option<String>,

    /// Root `$id`; nested nodes get `<id>/<path>`
    #[arg(long = "id")]
    schema_id: Option<String>,

    /// Root title
    #[arg(long)]
    title: Option<String>,

    /// Root description
    #[arg(long)]
    description: Option<String>,

    /// How array item schemas are combined
    #[arg(long, value_enum)]
    items_mode: Option<ItemsMode>,

    /// Only mark properties named with --required as required
    #[arg(long)]
    no_required_by_default: bool,

    /// Property name that is always required (repeatable)
    #[arg(long = "required", value_name = "NAME")]
    required: Vec<String>,

    /// Options map as JSON, e.g. '{"items_schema_collect_mode":"AS_LIST"}'
    #[arg(long)]
    options: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate the input against the generated schema
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for GenerateArgs {
    fn from(cli: Cli) -> Self {
        GenerateArgs {
            input: cli.input,
            schema_id: cli.schema_id,
            title: cli.title,
            description: cli.description,
            items_mode: cli.items_mode.map(|mode| {
                match mode {
                    ItemsMode::AsAnyOf => "AS_ANY_OF",
                    ItemsMode::AsList => "AS_LIST",
                }
                .to_string()
            }),
            no_required_by_default: cli.no_required_by_default,
            required: cli.required,
            options: cli.options,
            format: match cli.format {
                Format::Json => "json",
                Format::Pretty => "pretty",
                Format::Yaml => "yaml",
            }
            .to_string(),
            output: cli.output,
            check: cli.check,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source = match cli.input.as_deref() {
        None | Some("-") => "stdin".to_string(),
        Some(path) => path.to_string(),
    };
    handle_generate(&GenerateArgs::from(cli))
        .with_context(|| format!("Failed to generate schema for {}", source))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        process::exit(code);
    }
}
