use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tagschema::core::{SchemaNode, format_schema};

#[derive(Args)]
pub struct SchemaArgs {
    /// Registered entity id
    #[arg(long)]
    id: String,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let registry = tagschema::entities::registry()?;
        let schema = registry
            .schema(&self.id)
            .with_context(|| format!("no entity type registered as '{}'", self.id))?;
        let text = format_schema(&SchemaNode::Compound(schema.clone()))?;

        match self.output {
            Some(path) => fs::write(path, format!("{text}\n"))?,
            None => println!("{text}"),
        }
        Ok(())
    }
}
