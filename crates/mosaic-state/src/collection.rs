use mosaic_types::{GalleryItem, ItemId};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// Moves the element at `from` to `to`, shifting everything in between by
/// one. Out of range indices leave the order untouched.
pub fn reorder<T: Clone>(order: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = order.to_vec();

    if from >= next.len() || to >= next.len() {
        debug!(from, to, len = next.len(), "Ignoring out of range reorder");
        return next;
    }

    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

/// Ordered gallery contents. Display order is insertion order and every id
/// appears exactly once.
///
/// Mutations return a new collection rather than editing in place; the
/// holder swaps in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCollection {
    items: Vec<GalleryItem>,
}

impl ItemCollection {
    pub fn new(items: Vec<GalleryItem>) -> Result<Self, CollectionError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CollectionError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Ids in display order
    pub fn order(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn ids(&self) -> BTreeSet<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn reorder(&self, from: usize, to: usize) -> Self {
        Self {
            items: reorder(&self.items, from, to),
        }
    }

    /// Drops every item whose id is in `ids`. Unknown ids are ignored.
    pub fn remove_by_ids(&self, ids: &BTreeSet<ItemId>) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| !ids.contains(&item.id))
                .cloned()
                .collect(),
        }
    }
}
