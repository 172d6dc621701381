use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::{load_tree, read_input, write_output};

#[derive(Args, Debug)]
pub struct Tree {
    /// OAI-PMH record (XML) or parsed record tree (JSON); stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Tree {
    pub fn execute(&self) -> Result<()> {
        let content = read_input(self.input.as_deref())?;
        let tree = load_tree(&content)?;
        let json = serde_json::to_string_pretty(&tree)?;
        write_output(self.output.as_ref(), &json)
    }
}
