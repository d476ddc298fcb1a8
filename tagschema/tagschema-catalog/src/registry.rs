//! Discriminator-keyed registry of typed builders.

use std::collections::HashMap;

use tagschema_core::{CompoundSchema, TagCompound, TagNode, Verifier};

use crate::error::{BuildError, ConstructError, RegistryError};

/// Field read to pick a registered type unless configured otherwise.
pub const DEFAULT_DISCRIMINATOR_FIELD: &str = "id";

/// A typed object that persists itself as a tag compound.
pub trait TypedObject {
    /// Discriminator value this object is registered under.
    fn discriminator(&self) -> &str;

    /// Build the persisted form of this object.
    fn to_compound(&self) -> TagCompound;
}

type BuildFn<T> = dyn Fn(&TagCompound) -> Result<T, BuildError> + Send + Sync;

struct Entry<T> {
    schema: CompoundSchema,
    build: Box<BuildFn<T>>,
}

/// Outcome of dispatching a compound to the registry.
#[derive(Debug)]
pub enum Dispatch<T> {
    Matched(T),
    /// No discriminator, or one this registry does not model. Callers skip these.
    NoMatch,
    /// The discriminator matched but the record is corrupt.
    Invalid(ConstructError),
}

impl<T> Dispatch<T> {
    pub fn is_matched(&self) -> bool {
        matches!(self, Dispatch::Matched(_))
    }

    pub fn into_result(self) -> Result<Option<T>, ConstructError> {
        match self {
            Dispatch::Matched(value) => Ok(Some(value)),
            Dispatch::NoMatch => Ok(None),
            Dispatch::Invalid(e) => Err(e),
        }
    }
}

/// Maps discriminator values to builders and the schemas they require.
pub struct Registry<T> {
    field: String,
    entries: HashMap<String, Entry<T>>,
}

/// Builder for configuring [`Registry`].
pub struct RegistryBuilder<T> {
    field: String,
    entries: Vec<(String, Entry<T>)>,
}

impl<T> Registry<T> {
    /// Create a builder for [`Registry`].
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder {
            field: DEFAULT_DISCRIMINATOR_FIELD.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn discriminator_field(&self) -> &str {
        &self.field
    }

    /// Read the discriminator of `compound` as text.
    /// A missing or non-string field yields `None`.
    pub fn discriminator_of<'c>(&self, compound: &'c TagCompound) -> Option<&'c str> {
        compound.get(&self.field).and_then(TagNode::as_str)
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.entries.contains_key(discriminator)
    }

    /// Schema registered for `discriminator`.
    pub fn schema(&self, discriminator: &str) -> Option<&CompoundSchema> {
        self.entries.get(discriminator).map(|e| &e.schema)
    }

    /// Registered discriminators in sorted order.
    pub fn discriminators(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Determine which registered type `compound` represents and build it.
    ///
    /// A discriminator match is only a hint: the record is verified against
    /// the registered schema before the builder sees it.
    pub fn dispatch(&self, compound: &TagCompound) -> Dispatch<T> {
        let Some(discriminator) = self.discriminator_of(compound) else {
            tracing::trace!(field = %self.field, "record has no string discriminator");
            return Dispatch::NoMatch;
        };
        let Some(entry) = self.entries.get(discriminator) else {
            tracing::debug!(discriminator, "no type registered for discriminator");
            return Dispatch::NoMatch;
        };

        if let Err(violation) = Verifier::verify_compound(&entry.schema, compound) {
            return Dispatch::Invalid(ConstructError::Nonconforming {
                discriminator: discriminator.to_string(),
                violation,
            });
        }

        match (entry.build)(compound) {
            Ok(value) => Dispatch::Matched(value),
            Err(source) => Dispatch::Invalid(ConstructError::Build {
                discriminator: discriminator.to_string(),
                source,
            }),
        }
    }

    /// [`dispatch`](Self::dispatch) for an arbitrary node; non-compounds never match.
    pub fn dispatch_node(&self, node: &TagNode) -> Dispatch<T> {
        match node.as_compound() {
            Some(compound) => self.dispatch(compound),
            None => Dispatch::NoMatch,
        }
    }

    /// Build `compound`, returning `Ok(None)` on a dispatch miss.
    pub fn construct(&self, compound: &TagCompound) -> Result<Option<T>, ConstructError> {
        self.dispatch(compound).into_result()
    }
}

impl<T: TypedObject> Registry<T> {
    /// Persisted form of `object`, with its discriminator written under the
    /// configured field.
    pub fn serialize(&self, object: &T) -> TagCompound {
        let mut compound = object.to_compound();
        compound.insert(self.field.as_str(), object.discriminator());
        compound
    }
}

impl<T> RegistryBuilder<T> {
    /// Set the field holding the discriminator (default: `id`).
    pub fn discriminator_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Register a builder for records whose discriminator equals `discriminator`.
    pub fn register<F>(
        mut self,
        discriminator: impl Into<String>,
        schema: CompoundSchema,
        build: F,
    ) -> Self
    where
        F: Fn(&TagCompound) -> Result<T, BuildError> + Send + Sync + 'static,
    {
        self.entries.push((
            discriminator.into(),
            Entry {
                schema,
                build: Box::new(build),
            },
        ));
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<Registry<T>, RegistryError> {
        if self.field.is_empty() {
            return Err(RegistryError::EmptyDiscriminatorField);
        }

        let mut entries = HashMap::with_capacity(self.entries.len());
        for (discriminator, entry) in self.entries {
            if entries.contains_key(&discriminator) {
                return Err(RegistryError::DuplicateDiscriminator(discriminator));
            }
            entries.insert(discriminator, entry);
        }

        tracing::debug!(
            field = %self.field,
            types = entries.len(),
            "type registry built"
        );
        Ok(Registry {
            field: self.field,
            entries,
        })
    }
}
