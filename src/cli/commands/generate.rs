//! Generate command implementation

use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::error::CliError;
use crate::cli::output::{parse_output_style, write_output};
use crate::generator::{
    GeneratorConfig, GeneratorError, ItemsCollectMode, SchemaGenerator, render, to_json_schema,
};
use crate::validation::validate_sample;

/// Arguments for the `generate` command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Input path, `-` or `None` for stdin
    pub input: Option<String>,
    /// Root `$id`
    pub schema_id: Option<String>,
    /// Root `title`
    pub title: Option<String>,
    /// Root `description`
    pub description: Option<String>,
    /// Items collection mode (`as-any-of`, `as-list`)
    pub items_mode: Option<String>,
    /// Only mark explicitly named properties as required
    pub no_required_by_default: bool,
    /// Property names that are always required
    pub required: Vec<String>,
    /// Options map as JSON text, applied before the flags above
    pub options: Option<String>,
    /// Output format (json, pretty, yaml)
    pub format: String,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Validate the input against the generated schema
    pub check: bool,
}

/// Load input content from file or stdin
fn load_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => read_stdin(std::io::stdin()),
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
        }
    }
}

fn read_stdin<R: Read>(mut reader: R) -> Result<String, CliError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| CliError::StdinReadError(e.to_string()))?;
    Ok(content)
}

/// Build the generator configuration from an options map and flags
pub fn build_config(args: &GenerateArgs) -> Result<GeneratorConfig, CliError> {
    let mut config = match args.options {
        Some(ref options) => GeneratorConfig::from_options_str(options)?,
        None => GeneratorConfig::default(),
    };

    if let Some(ref id) = args.schema_id {
        config.schema_id = Some(id.clone()).filter(|id| !id.is_empty());
    }
    if let Some(ref title) = args.title {
        config.schema_title = Some(title.clone());
    }
    if let Some(ref description) = args.description {
        config.schema_description = Some(description.clone());
    }
    if let Some(ref mode) = args.items_mode {
        config.items_schema_collect_mode = mode.parse::<ItemsCollectMode>()?;
    }
    if args.no_required_by_default {
        config.properties_required_by_default = false;
    }
    config
        .schema_required_field_names
        .extend(args.required.iter().cloned());

    Ok(config)
}

/// Generate schema text for already loaded input content
pub fn generate_text(args: &GenerateArgs, content: &str) -> Result<String, CliError> {
    let config = build_config(args)?;
    let style = parse_output_style(&args.format)?;

    let sample: serde_json::Value =
        serde_json::from_str(content).map_err(GeneratorError::from)?;

    let mut generator = SchemaGenerator::with_config(config.clone());
    let root = generator.generate_value(&sample)?;
    let stats = generator.stats();
    debug!(
        values = stats.values_visited,
        max_depth = stats.max_depth,
        collapsed = stats.alternatives_collapsed,
        "Inference complete"
    );

    if args.check {
        let schema = to_json_schema(&root, &config);
        validate_sample(&schema, &sample).map_err(GeneratorError::Validation)?;
        info!("Input validates against the generated schema");
    }

    Ok(render(&root, &config, style)?)
}

/// Handle the `generate` command
pub fn handle_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let content = load_input(args.input.as_deref())?;
    let text = generate_text(args, &content)?;
    write_output(&text, args.output.as_deref())?;

    if let Some(ref path) = args.output {
        info!("Schema written to: {}", path.display());
    }
    Ok(())
}
