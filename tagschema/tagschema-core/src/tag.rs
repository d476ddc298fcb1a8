//! Generic, mutable tag tree consumed by the verifier and the catalog layer.

use std::collections::BTreeMap;

use crate::{
    error::{FieldError, TagTypeError},
    kind::TagKind,
};

/// A node of the tagged format.
/// Every value carries its own kind; there are no implicit conversions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagNode {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(Vec<i8>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
    List(TagList),
    Compound(TagCompound),
}

impl TagNode {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn kind(&self) -> TagKind {
        match self {
            TagNode::Byte(_) => TagKind::Byte,
            TagNode::Short(_) => TagKind::Short,
            TagNode::Int(_) => TagKind::Int,
            TagNode::Long(_) => TagKind::Long,
            TagNode::Float(_) => TagKind::Float,
            TagNode::Double(_) => TagKind::Double,
            TagNode::String(_) => TagKind::String,
            TagNode::ByteArray(_) => TagKind::ByteArray,
            TagNode::IntArray(_) => TagKind::IntArray,
            TagNode::LongArray(_) => TagKind::LongArray,
            TagNode::List(_) => TagKind::List,
            TagNode::Compound(_) => TagKind::Compound,
        }
    }

    /// Element count of arrays and lists; `None` for scalars and compounds.
    pub fn len(&self) -> Option<usize> {
        match self {
            TagNode::ByteArray(v) => Some(v.len()),
            TagNode::IntArray(v) => Some(v.len()),
            TagNode::LongArray(v) => Some(v.len()),
            TagNode::List(list) => Some(list.len()),
            _ => None,
        }
    }

    /// Textual view of a string scalar, used for discriminator comparison.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TagList> {
        match self {
            TagNode::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut TagList> {
        match self {
            TagNode::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&TagCompound> {
        match self {
            TagNode::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut TagCompound> {
        match self {
            TagNode::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn try_byte(&self) -> Result<i8, TagTypeError> {
        match self {
            TagNode::Byte(v) => Ok(*v),
            _ => Err(self.type_mismatch(TagKind::Byte)),
        }
    }

    pub fn try_short(&self) -> Result<i16, TagTypeError> {
        match self {
            TagNode::Short(v) => Ok(*v),
            _ => Err(self.type_mismatch(TagKind::Short)),
        }
    }

    pub fn try_int(&self) -> Result<i32, TagTypeError> {
        match self {
            TagNode::Int(v) => Ok(*v),
            _ => Err(self.type_mismatch(TagKind::Int)),
        }
    }

    pub fn try_long(&self) -> Result<i64, TagTypeError> {
        match self {
            TagNode::Long(v) => Ok(*v),
            _ => Err(self.type_mismatch(TagKind::Long)),
        }
    }

    pub fn try_float(&self) -> Result<f32, TagTypeError> {
        match self {
            TagNode::Float(v) => Ok(*v),
            _ => Err(self.type_mismatch(TagKind::Float)),
        }
    }

    pub fn try_double(&self) -> Result<f64, TagTypeError> {
        match self {
            TagNode::Double(v) => Ok(*v),
            _ => Err(self.type_mismatch(TagKind::Double)),
        }
    }

    pub fn try_str(&self) -> Result<&str, TagTypeError> {
        self.as_str()
            .ok_or_else(|| self.type_mismatch(TagKind::String))
    }

    pub fn try_byte_array(&self) -> Result<&[i8], TagTypeError> {
        match self {
            TagNode::ByteArray(v) => Ok(v),
            _ => Err(self.type_mismatch(TagKind::ByteArray)),
        }
    }

    pub fn try_int_array(&self) -> Result<&[i32], TagTypeError> {
        match self {
            TagNode::IntArray(v) => Ok(v),
            _ => Err(self.type_mismatch(TagKind::IntArray)),
        }
    }

    pub fn try_long_array(&self) -> Result<&[i64], TagTypeError> {
        match self {
            TagNode::LongArray(v) => Ok(v),
            _ => Err(self.type_mismatch(TagKind::LongArray)),
        }
    }

    pub fn try_list(&self) -> Result<&TagList, TagTypeError> {
        self.as_list().ok_or_else(|| self.type_mismatch(TagKind::List))
    }

    pub fn try_compound(&self) -> Result<&TagCompound, TagTypeError> {
        self.as_compound()
            .ok_or_else(|| self.type_mismatch(TagKind::Compound))
    }

    pub fn type_mismatch(&self, expected: TagKind) -> TagTypeError {
        TagTypeError::new(expected, self.kind())
    }
}

macro_rules! impl_from_variant {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for TagNode {
                fn from(value: $ty) -> Self {
                    TagNode::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    TagList => List,
    TagCompound => Compound,
}

impl From<&str> for TagNode {
    fn from(value: &str) -> Self {
        TagNode::string(value)
    }
}

/// Ordered, homogeneous list of tag nodes.
///
/// The element kind is stored alongside the items so an empty list keeps
/// its declared type. [`push`](Self::push) does not check element kinds;
/// conformance is the verifier's job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagList {
    kind: TagKind,
    items: Vec<TagNode>,
}

impl TagList {
    pub fn new(kind: TagKind, items: Vec<TagNode>) -> Self {
        Self { kind, items }
    }

    pub fn empty(kind: TagKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TagNode> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagNode> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[TagNode] {
        &self.items
    }

    pub fn push(&mut self, item: impl Into<TagNode>) {
        self.items.push(item.into());
    }

    pub fn remove(&mut self, index: usize) -> TagNode {
        self.items.remove(index)
    }

    /// Keep only the items for which `keep` returns `true`.
    /// Returns the number of removed items.
    pub fn retain(&mut self, keep: impl FnMut(&TagNode) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        before - self.items.len()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a TagNode;
    type IntoIter = std::slice::Iter<'a, TagNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Named, heterogeneous container. Key order carries no meaning.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagCompound(BTreeMap<String, TagNode>);

impl TagCompound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TagNode>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TagNode>) -> Option<TagNode> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&TagNode> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TagNode> {
        self.0.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<TagNode> {
        self.0.remove(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagNode)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a required field and read it with `read`.
    pub fn field<'a, T>(
        &'a self,
        name: &str,
        read: impl FnOnce(&'a TagNode) -> Result<T, TagTypeError>,
    ) -> Result<T, FieldError> {
        let node = self.get(name).ok_or_else(|| FieldError::Missing {
            field: name.to_string(),
        })?;
        read(node).map_err(|source| FieldError::WrongKind {
            field: name.to_string(),
            source,
        })
    }

    pub fn get_byte(&self, name: &str) -> Result<i8, FieldError> {
        self.field(name, TagNode::try_byte)
    }

    pub fn get_short(&self, name: &str) -> Result<i16, FieldError> {
        self.field(name, TagNode::try_short)
    }

    pub fn get_int(&self, name: &str) -> Result<i32, FieldError> {
        self.field(name, TagNode::try_int)
    }

    pub fn get_long(&self, name: &str) -> Result<i64, FieldError> {
        self.field(name, TagNode::try_long)
    }

    pub fn get_float(&self, name: &str) -> Result<f32, FieldError> {
        self.field(name, TagNode::try_float)
    }

    pub fn get_double(&self, name: &str) -> Result<f64, FieldError> {
        self.field(name, TagNode::try_double)
    }

    pub fn get_str(&self, name: &str) -> Result<&str, FieldError> {
        self.field(name, TagNode::try_str)
    }

    pub fn get_list(&self, name: &str) -> Result<&TagList, FieldError> {
        self.field(name, TagNode::try_list)
    }

    pub fn get_compound(&self, name: &str) -> Result<&TagCompound, FieldError> {
        self.field(name, TagNode::try_compound)
    }
}

impl FromIterator<(String, TagNode)> for TagCompound {
    fn from_iter<I: IntoIterator<Item = (String, TagNode)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
