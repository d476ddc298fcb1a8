use std::{
    fmt::{Display, Formatter, Result},
    sync::Arc,
};

use crate::{error::SchemaError, kind::TagKind, tag::TagNode};

/// Expected shape of a tag subtree.
///
/// Variants mirror the container kinds of [`TagNode`]: scalar, array, list and compound.
/// The name is only meaningful for children of a [`CompoundSchema`]; root and
/// element schemas are conventionally anonymous (`""`).
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Scalar(ScalarSchema),
    Array(ArraySchema),
    List(ListSchema),
    Compound(CompoundSchema),
}

impl SchemaNode {
    pub fn name(&self) -> &str {
        match self {
            SchemaNode::Scalar(s) => &s.name,
            SchemaNode::Array(s) => &s.name,
            SchemaNode::List(s) => &s.name,
            SchemaNode::Compound(s) => &s.name,
        }
    }

    /// Whether a compound may omit this child.
    pub fn is_optional(&self) -> bool {
        match self {
            SchemaNode::Scalar(s) => s.optional,
            SchemaNode::Array(s) => s.optional,
            SchemaNode::List(s) => s.optional,
            SchemaNode::Compound(s) => s.optional,
        }
    }

    /// Tag kind a matching node must have.
    pub fn kind(&self) -> TagKind {
        match self {
            SchemaNode::Scalar(s) => s.kind,
            SchemaNode::Array(s) => s.kind,
            SchemaNode::List(_) => TagKind::List,
            SchemaNode::Compound(_) => TagKind::Compound,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, SchemaNode::Scalar(_))
    }
}

impl Display for SchemaNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_schema(self)?;
        f.write_str(&text)
    }
}

/// A scalar of one exact kind, optionally pinned to a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarSchema {
    pub name: String,
    pub kind: TagKind,
    pub value: Option<TagNode>,
    pub optional: bool,
}

impl ScalarSchema {
    pub fn new(name: impl Into<String>, kind: TagKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: None,
            optional: false,
        }
    }

    /// Scalar that must equal `value`, e.g. a discriminator `id = "Zombie"`.
    pub fn pinned(name: impl Into<String>, value: impl Into<TagNode>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            kind: value.kind(),
            value: Some(value),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A typed array. `length == 0` accepts any length.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    pub name: String,
    pub kind: TagKind,
    pub length: usize,
    pub optional: bool,
}

impl ArraySchema {
    pub fn new(name: impl Into<String>, kind: TagKind) -> Self {
        Self {
            name: name.into(),
            kind,
            length: 0,
            optional: false,
        }
    }

    pub fn bytes(name: impl Into<String>) -> Self {
        Self::new(name, TagKind::ByteArray)
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A list whose elements all have `element` kind. `length == 0` accepts any length.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSchema {
    pub name: String,
    pub element: TagKind,
    pub length: usize,
    pub optional: bool,
}

impl ListSchema {
    pub fn new(name: impl Into<String>, element: TagKind) -> Self {
        Self {
            name: name.into(),
            element,
            length: 0,
            optional: false,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A compound with named child expectations.
///
/// Children are held behind [`Arc`] so that a base schema can be merged into
/// many derived schemas without copying. A shared child can no longer be
/// mutated, which keeps every schema that incorporated it consistent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSchema {
    pub name: String,
    children: Vec<Arc<SchemaNode>>,
    pub optional: bool,
}

impl CompoundSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Append a child. Names must be unique within one compound.
    pub fn add(&mut self, child: impl Into<SchemaNode>) -> std::result::Result<(), SchemaError> {
        self.add_shared(Arc::new(child.into()))
    }

    pub fn add_shared(&mut self, child: Arc<SchemaNode>) -> std::result::Result<(), SchemaError> {
        if self.child(child.name()).is_some() {
            return Err(SchemaError::DuplicateChild {
                compound: self.name.clone(),
                child: child.name().to_string(),
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, child: impl Into<SchemaNode>) -> std::result::Result<Self, SchemaError> {
        self.add(child)?;
        Ok(self)
    }

    /// Append every child of `self` to `target` and return `target`.
    ///
    /// Children are shared, not copied. A name already present in `target`
    /// is rejected rather than silently deduplicated.
    pub fn merge_into(
        &self,
        mut target: CompoundSchema,
    ) -> std::result::Result<CompoundSchema, SchemaError> {
        for child in &self.children {
            target.add_shared(Arc::clone(child))?;
        }
        Ok(target)
    }

    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children
            .iter()
            .find(|c| c.name() == name)
            .map(Arc::as_ref)
    }

    pub fn children(&self) -> impl Iterator<Item = &Arc<SchemaNode>> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<ScalarSchema> for SchemaNode {
    fn from(value: ScalarSchema) -> Self {
        SchemaNode::Scalar(value)
    }
}

impl From<ArraySchema> for SchemaNode {
    fn from(value: ArraySchema) -> Self {
        SchemaNode::Array(value)
    }
}

impl From<ListSchema> for SchemaNode {
    fn from(value: ListSchema) -> Self {
        SchemaNode::List(value)
    }
}

impl From<CompoundSchema> for SchemaNode {
    fn from(value: CompoundSchema) -> Self {
        SchemaNode::Compound(value)
    }
}
