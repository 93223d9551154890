#[cfg(test)]
mod tests {
    use mosaic_config::GalleryConfig;
    use mosaic_state::{GalleryController, GalleryMessage, ResizeHub};
    use mosaic_types::{GalleryItem, HeaderState, ItemId};
    use std::collections::BTreeSet;

    fn seed(ids: &[i64]) -> Vec<GalleryItem> {
        ids.iter()
            .map(|&id| GalleryItem::new(id, format!("https://cdn.example/{id}.webp")))
            .collect()
    }

    fn order(raw: &[i64]) -> Vec<ItemId> {
        raw.iter().copied().map(ItemId).collect()
    }

    #[test]
    fn test_drag_select_delete_scenario() {
        let hub = ResizeHub::new();
        let mut gallery =
            GalleryController::mount(seed(&[1, 2, 3, 4, 5]), 1280, GalleryConfig::default(), &hub)
                .unwrap();
        assert_eq!(gallery.columns(), 5);

        // Drag the first tile to index 3
        gallery.on_reorder(0, 3);
        assert_eq!(gallery.order(), order(&[2, 3, 4, 1, 5]));

        gallery.on_toggle(ItemId(4), true);
        let expected: BTreeSet<ItemId> = [ItemId(4)].into_iter().collect();
        assert_eq!(gallery.selected_ids(), &expected);
        assert_eq!(gallery.header().label(), "1 images selected");

        gallery.on_delete_selected();
        assert_eq!(gallery.order(), order(&[2, 3, 1, 5]));
        assert!(gallery.selected_ids().is_empty());
        assert_eq!(gallery.header(), HeaderState::Title);
    }

    #[test]
    fn test_resize_notifications_reach_mounted_gallery() {
        let hub = ResizeHub::new();
        let mut gallery =
            GalleryController::mount(seed(&[1, 2, 3, 4, 5]), 1280, GalleryConfig::default(), &hub)
                .unwrap();
        assert!(gallery.is_mounted());
        assert_eq!(hub.listener_count(), 1);

        hub.notify(1100);
        assert_eq!(gallery.pump_resize(), None);

        hub.notify(700);
        assert_eq!(gallery.pump_resize(), Some(2));
        assert_eq!(gallery.layout().row_count, 3);

        // Nothing queued
        assert_eq!(gallery.pump_resize(), None);
    }

    #[test]
    fn test_unmount_releases_listener() {
        let hub = ResizeHub::new();
        let mut gallery =
            GalleryController::mount(seed(&[1, 2]), 1280, GalleryConfig::default(), &hub).unwrap();
        assert_eq!(hub.listener_count(), 1);

        gallery.unmount();
        assert!(!gallery.is_mounted());
        assert_eq!(hub.listener_count(), 0);

        // Widths sent after teardown go nowhere
        assert_eq!(hub.notify(500), 0);
        assert_eq!(gallery.pump_resize(), None);
        assert_eq!(gallery.columns(), 5);
    }

    #[test]
    fn test_dropping_gallery_releases_listener() {
        let hub = ResizeHub::new();
        {
            let _gallery =
                GalleryController::mount(seed(&[1]), 1280, GalleryConfig::default(), &hub)
                    .unwrap();
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_failed_mount_leaves_no_listener() {
        let hub = ResizeHub::new();
        let result = GalleryController::mount(seed(&[1, 1]), 1280, GalleryConfig::default(), &hub);
        assert!(result.is_err());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_events_apply_in_arrival_order() {
        let mut gallery =
            GalleryController::new(seed(&[1, 2, 3, 4]), 1280, GalleryConfig::default()).unwrap();

        let events = [
            GalleryMessage::Toggle {
                id: ItemId(1),
                checked: true,
            },
            GalleryMessage::Reorder { from: 0, to: 3 },
            GalleryMessage::Toggle {
                id: ItemId(2),
                checked: true,
            },
            GalleryMessage::Toggle {
                id: ItemId(1),
                checked: false,
            },
            GalleryMessage::DeleteSelected,
            // Index 3 no longer exists after the delete
            GalleryMessage::Reorder { from: 3, to: 0 },
            GalleryMessage::Reorder { from: 2, to: 0 },
        ];

        for event in events {
            gallery.update(event);
        }

        assert_eq!(gallery.order(), order(&[1, 3, 4]));
        assert_eq!(gallery.selected_count(), 0);
    }

    #[test]
    fn test_delete_everything() {
        let mut gallery =
            GalleryController::new(seed(&[1, 2]), 500, GalleryConfig::default()).unwrap();
        gallery.on_toggle(ItemId(1), true);
        gallery.on_toggle(ItemId(2), true);

        assert_eq!(gallery.on_delete_selected(), 2);
        assert!(gallery.items().is_empty());
        assert_eq!(gallery.layout().row_count, 0);
        assert_eq!(gallery.layout().container_height, 0);
    }
}
