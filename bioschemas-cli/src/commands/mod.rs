pub mod map;
pub mod tree;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bioschemas_core::Node;
use bioschemas_core::tree::parse_xml;

/// Read the whole input: a file, or stdin when the path is absent or `-`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Build the record tree. Content starting with `{` is taken as an already
/// parsed tree in JSON form, anything else as XML.
pub fn load_tree(content: &str) -> Result<Node> {
    if content.trim_start().starts_with('{') {
        serde_json::from_str(content).context("Failed to parse JSON record tree")
    } else {
        parse_xml(content).context("Failed to parse XML record")
    }
}

/// Write to a file, or stdout when no path is given
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
        }
    }
    Ok(())
}
