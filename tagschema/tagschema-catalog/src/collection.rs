//! Typed, lazily materialized view over a list of tag compounds.

use std::iter::FusedIterator;

use tagschema_core::{TagList, TagNode};

use crate::{
    error::ConstructError,
    registry::{Dispatch, Registry, TypedObject},
};

/// A live view over a backing [`TagList`] that builds typed objects on access.
///
/// The list is borrowed, never copied: every mutation lands in the caller's
/// tree. Records the registry does not model are skipped by every operation.
///
/// The dirty flag is raised by [`add`](Self::add) and by removals that remove
/// something. The view never lowers it; whoever persists the list calls
/// [`set_dirty(false)`](Self::set_dirty) after a successful write.
pub struct CollectionView<'a, T> {
    entities: &'a mut TagList,
    registry: &'a Registry<T>,
    dirty: bool,
}

impl<'a, T> CollectionView<'a, T> {
    pub fn new(entities: &'a mut TagList, registry: &'a Registry<T>) -> Self {
        Self {
            entities,
            registry,
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Number of backing records, including ones the registry does not model.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn registry(&self) -> &Registry<T> {
        self.registry
    }

    /// Backing list as currently mutated.
    pub fn entities(&self) -> &TagList {
        &*self.entities
    }

    /// Lazily build every modeled record, in backing order.
    ///
    /// Each call starts over from the list's current state. Corrupt records
    /// are yielded as `Err`; unmodeled ones are skipped.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            entities: &*self.entities,
            registry: self.registry,
            cursor: 0,
        }
    }

    /// Build every record whose discriminator equals `discriminator`.
    ///
    /// Fails on the first matching record that does not build; matches
    /// collected before it are discarded. Use
    /// [`find_all_matching`](Self::find_all_matching) to skip such records.
    pub fn find_all(&self, discriminator: &str) -> Result<Vec<T>, ConstructError> {
        let mut found = Vec::new();
        for compound in self.entities.iter().filter_map(TagNode::as_compound) {
            if self.registry.discriminator_of(compound) != Some(discriminator) {
                continue;
            }
            if let Some(object) = self.registry.construct(compound)? {
                found.push(object);
            }
        }
        Ok(found)
    }

    /// Build every modeled record and keep those accepted by `matches`.
    /// Records that fail to build are skipped.
    pub fn find_all_matching(&self, mut matches: impl FnMut(&T) -> bool) -> Vec<T> {
        self.iter()
            .filter_map(|object| match object {
                Ok(object) => Some(object),
                Err(error) => {
                    tracing::warn!(%error, "skipping record that failed to build");
                    None
                }
            })
            .filter(|object| matches(object))
            .collect()
    }

    /// Remove every record whose discriminator equals `discriminator`.
    /// Records that fail to build are kept. Returns the number removed.
    pub fn remove_all(&mut self, discriminator: &str) -> usize {
        let registry = self.registry;
        let removed = self.entities.retain(|node| {
            let Some(compound) = node.as_compound() else {
                return true;
            };
            if registry.discriminator_of(compound) != Some(discriminator) {
                return true;
            }
            retain_record(registry.dispatch(compound), |_| false)
        });
        self.note_removed(removed)
    }

    /// Remove every modeled record accepted by `matches`. Corrupt and
    /// unmodeled records are kept. Returns the number removed.
    pub fn remove_all_matching(&mut self, mut matches: impl FnMut(&T) -> bool) -> usize {
        let registry = self.registry;
        let removed = self
            .entities
            .retain(|node| retain_record(registry.dispatch_node(node), |o| !matches(o)));
        self.note_removed(removed)
    }

    fn note_removed(&mut self, removed: usize) -> usize {
        if removed > 0 {
            self.dirty = true;
        }
        tracing::debug!(removed, "removed records from collection");
        removed
    }
}

/// Retain decision for a dispatched record: built records defer to `keep`,
/// unmodeled and corrupt ones always stay.
fn retain_record<T>(dispatch: Dispatch<T>, keep: impl FnOnce(&T) -> bool) -> bool {
    match dispatch {
        Dispatch::Matched(object) => keep(&object),
        Dispatch::NoMatch => true,
        Dispatch::Invalid(error) => {
            tracing::warn!(%error, "keeping record that failed to build");
            true
        }
    }
}

impl<T: TypedObject> CollectionView<'_, T> {
    /// Serialize `object` and append it.
    pub fn add(&mut self, object: &T) {
        let compound = self.registry.serialize(object);
        self.entities.push(compound);
        self.dirty = true;
    }
}

impl<'c, T> IntoIterator for &'c CollectionView<'_, T> {
    type Item = Result<T, ConstructError>;
    type IntoIter = Iter<'c, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over a borrowed [`TagList`] returned by [`CollectionView::iter`].
///
/// The cursor holds a shared borrow of the list, so the view cannot be
/// mutated while an iteration is in progress.
pub struct Iter<'c, T> {
    entities: &'c TagList,
    registry: &'c Registry<T>,
    cursor: usize,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = Result<T, ConstructError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.entities.get(self.cursor) {
            self.cursor += 1;
            match self.registry.dispatch_node(node) {
                Dispatch::Matched(object) => return Some(Ok(object)),
                Dispatch::NoMatch => {
                    tracing::trace!(index = self.cursor - 1, "skipping unmodeled record");
                }
                Dispatch::Invalid(error) => return Some(Err(error)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entities.len().saturating_sub(self.cursor)))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
