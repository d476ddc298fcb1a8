use anyhow::Result;
use clap::Args;
use tagschema::{CollectionView, TypedObject};

use crate::input::InputArgs;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Only list entities with this id
    #[arg(long)]
    id: Option<String>,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let registry = tagschema::entities::registry()?;
        let mut root = self.input.load()?;
        let view = CollectionView::new(self.input.entities(&mut root)?, &registry);

        let found = match &self.id {
            Some(id) => view.find_all(id)?,
            None => view.iter().collect::<Result<Vec<_>, _>>()?,
        };
        for entity in &found {
            let mob = entity.mob();
            let pos = mob.entity.pos;
            println!(
                "{:<8} pos=({:.2}, {:.2}, {:.2}) health={}",
                entity.discriminator(),
                pos.x,
                pos.y,
                pos.z,
                mob.health
            );
        }
        tracing::info!(count = found.len(), total = view.len(), "listed entities");
        Ok(())
    }
}
