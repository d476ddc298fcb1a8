use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tagschema::CollectionView;

use crate::input::{self, InputArgs};

#[derive(Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Id of the entities to remove
    #[arg(long)]
    id: String,

    /// Output file path (input is overwritten if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RemoveArgs {
    pub fn run(self) -> Result<()> {
        let registry = tagschema::entities::registry()?;
        let mut root = self.input.load()?;

        let mut view = CollectionView::new(self.input.entities(&mut root)?, &registry);
        let removed = view.remove_all(&self.id);
        if !view.is_dirty() {
            println!("no '{}' entities found", self.id);
            return Ok(());
        }

        let path = self.output.as_ref().unwrap_or(&self.input.path);
        input::save(path, &root)?;
        println!("removed {removed} '{}' entities, wrote {}", self.id, path.display());
        Ok(())
    }
}
