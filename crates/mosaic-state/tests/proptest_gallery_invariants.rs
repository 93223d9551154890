//! Property tests for the collection, selection and viewport rules.

use mosaic_config::{Breakpoints, GalleryConfig};
use mosaic_state::{GalleryController, GalleryMessage, ItemCollection, SelectionSet};
use mosaic_state::{columns_for_width, reorder};
use mosaic_types::{GalleryItem, ItemId};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ── Strategies ──────────────────────────────────────────────────────────

fn collection_strategy() -> impl Strategy<Value = ItemCollection> {
    prop::collection::btree_set(0i64..500, 0..40)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|ids| {
            let items = ids
                .into_iter()
                .map(|id| GalleryItem::new(id, format!("{id}.png")))
                .collect();
            ItemCollection::new(items).expect("ids are unique")
        })
}

fn message_strategy() -> impl Strategy<Value = GalleryMessage> {
    prop_oneof![
        (0usize..24, 0usize..24).prop_map(|(from, to)| GalleryMessage::Reorder { from, to }),
        (0i64..24, any::<bool>()).prop_map(|(id, checked)| GalleryMessage::Toggle {
            id: ItemId(id),
            checked
        }),
        Just(GalleryMessage::DeleteSelected),
        (0u32..2000).prop_map(GalleryMessage::Resized),
    ]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reorder_is_a_permutation(items in collection_strategy(), from in 0usize..40, to in 0usize..40) {
        let moved = items.reorder(from, to);
        prop_assert_eq!(moved.len(), items.len());
        prop_assert_eq!(moved.ids(), items.ids());

        if from < items.len() && to < items.len() {
            prop_assert_eq!(moved.get(to).map(|item| item.id), items.get(from).map(|item| item.id));
        } else {
            prop_assert_eq!(moved, items);
        }
    }

    #[test]
    fn reorder_to_same_index_is_identity(values in prop::collection::vec(any::<u8>(), 0..30), index in 0usize..30) {
        prop_assert_eq!(reorder(&values, index, index), values);
    }

    #[test]
    fn remove_by_ids_filters_and_keeps_order(
        items in collection_strategy(),
        doomed in prop::collection::btree_set(0i64..500, 0..40),
    ) {
        let doomed: BTreeSet<ItemId> = doomed.into_iter().map(ItemId).collect();
        let remaining = items.remove_by_ids(&doomed);

        prop_assert!(remaining.order().iter().all(|id| !doomed.contains(id)));

        let expected: Vec<ItemId> = items
            .order()
            .into_iter()
            .filter(|id| !doomed.contains(id))
            .collect();
        prop_assert_eq!(remaining.order(), expected);
    }

    #[test]
    fn toggle_round_trip(ids in prop::collection::btree_set(0i64..100, 0..20), id in 100i64..200) {
        let selection: SelectionSet = ids.into_iter().map(ItemId).collect();
        let round_trip = selection.toggle(ItemId(id), true).toggle(ItemId(id), false);
        prop_assert_eq!(round_trip, selection);
    }

    #[test]
    fn column_rule_matches_breakpoint(width in any::<u32>()) {
        let columns = columns_for_width(&Breakpoints::default(), width);
        if width <= 768 {
            prop_assert_eq!(columns, 2);
        } else {
            prop_assert_eq!(columns, 5);
        }
    }

    #[test]
    fn selection_never_outlives_items(messages in prop::collection::vec(message_strategy(), 0..60)) {
        let seed = (0i64..16).map(|id| GalleryItem::new(id, format!("{id}.png"))).collect();
        let mut gallery = GalleryController::new(seed, 1024, GalleryConfig::default()).unwrap();

        for message in messages {
            gallery.update(message);

            let live = gallery.collection().ids();
            prop_assert!(gallery.selected_ids().is_subset(&live));
            prop_assert_eq!(live.len(), gallery.collection().len());
            prop_assert!(gallery.columns() > 0);
        }

        gallery.on_delete_selected();
        prop_assert_eq!(gallery.selected_count(), 0);
        prop_assert!(gallery.items().iter().all(|item| !item.selected));
    }
}
