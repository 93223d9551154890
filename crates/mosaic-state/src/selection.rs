use mosaic_types::ItemId;
use std::collections::BTreeSet;

/// Ids currently marked for bulk action, kept apart from the items
/// themselves and joined in at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self, id: ItemId, checked: bool) -> Self {
        let mut ids = self.ids.clone();
        if checked {
            ids.insert(id);
        } else {
            ids.remove(&id);
        }
        Self { ids }
    }

    pub fn prune_to_existing(&self, live_ids: &BTreeSet<ItemId>) -> Self {
        Self {
            ids: self.ids.intersection(live_ids).copied().collect(),
        }
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &BTreeSet<ItemId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ItemId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
