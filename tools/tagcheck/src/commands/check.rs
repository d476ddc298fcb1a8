use anyhow::{Result, bail};
use clap::Args;
use tagschema::{
    Dispatch, TypedObject,
    catalog::ConstructError,
    core::{SchemaNode, Verifier},
};

use crate::input::InputArgs;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Report every violation of an invalid record instead of the first
    #[arg(long)]
    all: bool,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let registry = tagschema::entities::registry()?;
        let mut root = self.input.load()?;
        let entities = self.input.entities(&mut root)?;

        let (mut matched, mut skipped, mut invalid) = (0usize, 0usize, 0usize);
        for (i, node) in entities.iter().enumerate() {
            match registry.dispatch_node(node) {
                Dispatch::Matched(entity) => {
                    matched += 1;
                    println!("[{i}] {}: ok", entity.discriminator());
                }
                Dispatch::NoMatch => {
                    skipped += 1;
                    println!("[{i}] skipped");
                }
                Dispatch::Invalid(err) => {
                    invalid += 1;
                    println!("[{i}] {err}");
                    if !self.all {
                        continue;
                    }
                    let ConstructError::Nonconforming { discriminator, .. } = &err else {
                        continue;
                    };
                    if let Some(schema) = registry.schema(discriminator) {
                        let schema = SchemaNode::Compound(schema.clone());
                        for violation in Verifier::violations(&schema, node) {
                            println!("    {violation}");
                        }
                    }
                }
            }
        }

        println!("{matched} matched, {skipped} skipped, {invalid} invalid");
        if invalid > 0 {
            bail!("{invalid} invalid record(s) in {}", self.input.path.display());
        }
        Ok(())
    }
}
