//! Output formatting for CLI

use std::path::Path;

use crate::cli::error::CliError;
use crate::generator::OutputStyle;

/// Map a `--format` value to an output style
pub fn parse_output_style(format: &str) -> Result<OutputStyle, CliError> {
    match format {
        "json" | "compact" => Ok(OutputStyle::Compact),
        "pretty" => Ok(OutputStyle::Pretty),
        "yaml" | "yml" => Ok(OutputStyle::Yaml),
        _ => Err(CliError::InvalidArgument(format!(
            "Unknown format: {}",
            format
        ))),
    }
}

/// Write rendered schema text to a file, or stdout when no path is given
pub fn write_output(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            let mut content = text.to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            std::fs::write(path, content)
                .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))
        }
        None => {
            if text.ends_with('\n') {
                print!("{}", text);
            } else {
                println!("{}", text);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_style() {
        assert_eq!(parse_output_style("json").unwrap(), OutputStyle::Compact);
        assert_eq!(parse_output_style("pretty").unwrap(), OutputStyle::Pretty);
        assert_eq!(parse_output_style("yml").unwrap(), OutputStyle::Yaml);
        assert!(matches!(
            parse_output_style("xml"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        write_output(r#"{"type":"null"}"#, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\"type\":\"null\"}\n");
    }
}
