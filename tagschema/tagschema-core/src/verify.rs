//! Structural verification of a tag tree against a [`SchemaNode`].
//!
//! Schemas are a lower bound on shape: every child a compound schema names
//! must be present (unless optional) and conform, while extra keys in the
//! tag compound are ignored. List elements are checked by kind only.

use std::fmt;

use crate::{
    kind::TagKind,
    schema::{CompoundSchema, SchemaNode},
    tag::{TagCompound, TagNode},
};

/// One way a tag tree fails to conform, located by a dotted path
/// (`Riding.Pos[2]`); the empty path is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// A required compound child is absent.
    Missing,
    KindMismatch { expected: TagKind, found: TagKind },
    /// A pinned scalar holds a different value.
    ValueMismatch { expected: TagNode, found: TagNode },
    LengthMismatch { expected: usize, found: usize },
    /// A list declares, or holds an element of, the wrong kind.
    ElementKindMismatch { expected: TagKind, found: TagKind },
    /// The schema itself declares a kind its variant cannot hold, e.g. a
    /// scalar schema of kind `compound`. No node conforms.
    UnsupportedKind { declared: TagKind },
}

impl Violation {
    fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.display_path();
        match &self.kind {
            ViolationKind::Missing => write!(f, "field `{path}` missing"),
            ViolationKind::KindMismatch { expected, found } => {
                write!(f, "expected {expected} at `{path}`, found {found}")
            }
            ViolationKind::ValueMismatch { expected, found } => {
                write!(f, "expected {expected:?} at `{path}`, found {found:?}")
            }
            ViolationKind::LengthMismatch { expected, found } => {
                write!(f, "expected length {expected} at `{path}`, found {found}")
            }
            ViolationKind::ElementKindMismatch { expected, found } => {
                write!(f, "expected {expected} elements at `{path}`, found {found}")
            }
            ViolationKind::UnsupportedKind { declared } => {
                write!(f, "schema at `{path}` declares unsupported kind {declared}")
            }
        }
    }
}

impl std::error::Error for Violation {}

/// Walks a schema and a tag tree together.
///
/// [`verify`](Self::verify) stops at the first violation; [`violations`](Self::violations)
/// reports every one found in a single pass.
pub struct Verifier {
    collect_all: bool,
    violations: Vec<Violation>,
}

impl Verifier {
    pub fn verify(schema: &SchemaNode, tag: &TagNode) -> Result<(), Violation> {
        let mut verifier = Self::first_only();
        verifier.check(schema, tag, "");
        verifier.into_result()
    }

    /// Same as [`verify`](Self::verify) for a compound schema and an unwrapped compound.
    pub fn verify_compound(schema: &CompoundSchema, tag: &TagCompound) -> Result<(), Violation> {
        let mut verifier = Self::first_only();
        verifier.check_fields(schema, tag, "");
        verifier.into_result()
    }

    pub fn violations(schema: &SchemaNode, tag: &TagNode) -> Vec<Violation> {
        let mut verifier = Self {
            collect_all: true,
            violations: Vec::new(),
        };
        verifier.check(schema, tag, "");
        verifier.violations
    }

    pub fn is_valid(schema: &SchemaNode, tag: &TagNode) -> bool {
        Self::verify(schema, tag).is_ok()
    }

    fn first_only() -> Self {
        Self {
            collect_all: false,
            violations: Vec::new(),
        }
    }

    fn into_result(mut self) -> Result<(), Violation> {
        match self.violations.pop() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Record a violation. Returns whether the walk should continue.
    fn report(&mut self, path: &str, kind: ViolationKind) -> bool {
        self.violations.push(Violation {
            path: path.to_string(),
            kind,
        });
        self.collect_all
    }

    fn check(&mut self, schema: &SchemaNode, tag: &TagNode, path: &str) -> bool {
        let supported = match schema {
            SchemaNode::Scalar(scalar) => scalar.kind.is_scalar(),
            SchemaNode::Array(array) => array.kind.is_array(),
            SchemaNode::List(_) | SchemaNode::Compound(_) => true,
        };
        if !supported {
            return self.report(
                path,
                ViolationKind::UnsupportedKind {
                    declared: schema.kind(),
                },
            );
        }

        if tag.kind() != schema.kind() {
            return self.report(
                path,
                ViolationKind::KindMismatch {
                    expected: schema.kind(),
                    found: tag.kind(),
                },
            );
        }

        match schema {
            SchemaNode::Scalar(scalar) => match &scalar.value {
                Some(expected) if expected != tag => self.report(
                    path,
                    ViolationKind::ValueMismatch {
                        expected: expected.clone(),
                        found: tag.clone(),
                    },
                ),
                _ => true,
            },
            SchemaNode::Array(array) => {
                let found = tag.len().unwrap_or_default();
                if array.length > 0 && found != array.length {
                    return self.report(
                        path,
                        ViolationKind::LengthMismatch {
                            expected: array.length,
                            found,
                        },
                    );
                }
                true
            }
            SchemaNode::List(schema) => {
                let Some(list) = tag.as_list() else {
                    return true;
                };
                if schema.length > 0
                    && list.len() != schema.length
                    && !self.report(
                        path,
                        ViolationKind::LengthMismatch {
                            expected: schema.length,
                            found: list.len(),
                        },
                    )
                {
                    return false;
                }
                // An empty list's declared kind is often a placeholder; only
                // populated lists must declare the expected element kind.
                if !list.is_empty()
                    && list.kind() != schema.element
                    && !self.report(
                        path,
                        ViolationKind::ElementKindMismatch {
                            expected: schema.element,
                            found: list.kind(),
                        },
                    )
                {
                    return false;
                }
                for (i, item) in list.iter().enumerate() {
                    if item.kind() != schema.element {
                        let item_path = format!("{path}[{i}]");
                        let keep_going = self.report(
                            &item_path,
                            ViolationKind::ElementKindMismatch {
                                expected: schema.element,
                                found: item.kind(),
                            },
                        );
                        if !keep_going {
                            return false;
                        }
                    }
                }
                true
            }
            SchemaNode::Compound(schema) => match tag.as_compound() {
                Some(compound) => self.check_fields(schema, compound, path),
                None => true,
            },
        }
    }

    fn check_fields(&mut self, schema: &CompoundSchema, tag: &TagCompound, path: &str) -> bool {
        for child in schema.children() {
            let child_path = if path.is_empty() {
                child.name().to_string()
            } else {
                format!("{path}.{}", child.name())
            };

            let keep_going = match tag.get(child.name()) {
                Some(value) => self.check(child, value, &child_path),
                None if child.is_optional() => true,
                None => self.report(&child_path, ViolationKind::Missing),
            };
            if !keep_going {
                return false;
            }
        }
        true
    }
}
