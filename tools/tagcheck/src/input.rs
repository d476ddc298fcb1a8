use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use tagschema::{TagList, TagNode};

/// Location of the entity list inside a JSON-rendered tag tree.
#[derive(Args)]
pub struct InputArgs {
    /// Path to the JSON tag tree
    #[arg(value_name = "INPUT")]
    pub path: PathBuf,

    /// Field of the root compound holding the entity list
    #[arg(long, default_value = "Entities")]
    pub field: String,
}

impl InputArgs {
    pub fn load(&self) -> Result<TagNode> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", self.path.display()))
    }

    pub fn entities<'a>(&self, root: &'a mut TagNode) -> Result<&'a mut TagList> {
        entity_list(root, &self.field)
    }
}

/// The root itself when it is a list, otherwise the list under `field`.
pub fn entity_list<'a>(root: &'a mut TagNode, field: &str) -> Result<&'a mut TagList> {
    match root {
        TagNode::List(list) => Ok(list),
        TagNode::Compound(c) => c
            .get_mut(field)
            .and_then(TagNode::as_list_mut)
            .ok_or_else(|| anyhow!("root compound has no `{field}` list")),
        other => bail!("root is a {}, expected a list or compound", other.kind()),
    }
}

pub fn save(path: &Path, root: &TagNode) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, root)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tagschema::{TagCompound, TagKind};

    use super::*;

    fn entities() -> TagList {
        let mut list = TagList::empty(TagKind::Compound);
        list.push(TagCompound::new().with("id", "Zombie"));
        list
    }

    #[test]
    fn root_list_is_the_entity_list() {
        let mut root = TagNode::List(entities());
        assert_eq!(entity_list(&mut root, "Entities").unwrap().len(), 1);
    }

    #[test]
    fn compound_root_uses_named_field() {
        let mut root = TagNode::Compound(TagCompound::new().with("Mobs", entities()));
        assert_eq!(entity_list(&mut root, "Mobs").unwrap().len(), 1);
        assert!(entity_list(&mut root, "Entities").is_err());
    }

    #[test]
    fn scalar_root_is_rejected() {
        let mut root = TagNode::Int(3);
        let err = entity_list(&mut root, "Entities").unwrap_err();
        assert!(err.to_string().contains("expected a list or compound"));
    }

    #[test]
    fn json_rendering_loads() {
        let json = r#"{"Compound":{"Entities":{"List":{"kind":"Compound","items":[
            {"Compound":{"id":{"String":"Squid"}}}
        ]}}}}"#;
        let mut root: TagNode = serde_json::from_str(json).unwrap();
        let list = entity_list(&mut root, "Entities").unwrap();
        let first = list.get(0).and_then(TagNode::as_compound).unwrap();
        assert_eq!(first.get_str("id").unwrap(), "Squid");
    }
}
