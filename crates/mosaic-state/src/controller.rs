//! Gallery screen state
//!
//! The controller is the single writer for the item collection and the
//! selection. Every handler reads the committed state, derives the next
//! value and swaps it in before the next event is handled.

use std::collections::BTreeSet;

use mosaic_config::GalleryConfig;
use mosaic_types::{GalleryItem, HeaderState, ItemId, RenderItem, TileKind};
use serde::Serialize;
use shared::grid_layout::{GridLayout, GridLayoutDeriver};
use tracing::{debug, info};

use crate::{
    collection::ItemCollection,
    error::GalleryResult,
    selection::SelectionSet,
    viewport::{ResizeHub, ResizeSubscription, ViewportTracker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryMessage {
    /// Drag released: move the tile at `from` to `to`
    Reorder { from: usize, to: usize },
    /// Checkbox changed
    Toggle { id: ItemId, checked: bool },
    DeleteSelected,
    Resized(u32),
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryFrame {
    pub header: HeaderState,
    pub columns: usize,
    pub layout: GridLayout,
    /// Row height of the drop zone tiles snap to while dragging
    pub slot_height: u32,
    pub selected_count: usize,
    pub items: Vec<RenderItem>,
}

#[derive(Debug)]
pub struct GalleryController {
    config: GalleryConfig,
    items: ItemCollection,
    selection: SelectionSet,
    viewport: ViewportTracker,
    deriver: GridLayoutDeriver,
    resize: Option<ResizeSubscription>,
}

impl GalleryController {
    /// Builds the screen state without listening for resizes.
    pub fn new(
        initial_items: Vec<GalleryItem>,
        initial_width: u32,
        config: GalleryConfig,
    ) -> GalleryResult<Self> {
        config.validate()?;
        let items = ItemCollection::new(initial_items)?;
        let viewport = ViewportTracker::new(config.breakpoints(), initial_width);
        let deriver = GridLayoutDeriver::new(config.row_height);

        Ok(Self {
            config,
            items,
            selection: SelectionSet::new(),
            viewport,
            deriver,
            resize: None,
        })
    }

    /// Builds the screen state and registers a resize listener on `hub`. The
    /// listener lives as long as the controller, or until `unmount`.
    pub fn mount(
        initial_items: Vec<GalleryItem>,
        initial_width: u32,
        config: GalleryConfig,
        hub: &ResizeHub,
    ) -> GalleryResult<Self> {
        let mut controller = Self::new(initial_items, initial_width, config)?;
        controller.resize = Some(hub.subscribe());

        info!(
            items = controller.items.len(),
            width = initial_width,
            columns = controller.columns(),
            "Gallery mounted"
        );
        Ok(controller)
    }

    pub fn unmount(&mut self) {
        if self.resize.take().is_some() {
            info!("Gallery unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.resize.is_some()
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn collection(&self) -> &ItemCollection {
        &self.items
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn order(&self) -> Vec<ItemId> {
        self.items.order()
    }

    pub fn selected_ids(&self) -> &BTreeSet<ItemId> {
        self.selection.ids()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn columns(&self) -> usize {
        self.viewport.columns()
    }

    pub fn layout(&self) -> GridLayout {
        self.deriver.layout(self.items.len(), self.columns())
    }

    pub fn header(&self) -> HeaderState {
        HeaderState::from_selected_count(self.selected_count())
    }

    /// Items in display order with their selection joined in
    pub fn items(&self) -> Vec<RenderItem> {
        let layout = self.layout();

        self.items
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let tile = TileKind::for_position(index);
                let (row, column) = layout.cell_position(index);
                RenderItem {
                    id: item.id,
                    source: item.source.clone(),
                    selected: self.selection.contains(item.id),
                    is_first: index == 0,
                    tile,
                    tile_height: self.config.tile_height_for(tile.is_lead()),
                    row,
                    column,
                }
            })
            .collect()
    }

    pub fn frame(&self) -> GalleryFrame {
        GalleryFrame {
            header: self.header(),
            columns: self.columns(),
            layout: self.layout(),
            slot_height: self.config.slot_height,
            selected_count: self.selected_count(),
            items: self.items(),
        }
    }

    /// Returns whether the order changed.
    pub fn on_reorder(&mut self, from: usize, to: usize) -> bool {
        let next = self.items.reorder(from, to);
        let changed = next != self.items;
        self.items = next;

        if changed {
            debug!(from, to, "Items reordered");
        }
        self.check_invariants();
        changed
    }

    /// Toggles for ids that are not in the gallery are ignored.
    pub fn on_toggle(&mut self, id: ItemId, checked: bool) {
        if !self.items.contains(id) {
            debug!(%id, "Ignoring toggle for unknown item");
            return;
        }

        self.selection = self.selection.toggle(id, checked);
        debug!(%id, checked, selected = self.selection.len(), "Selection changed");
        self.check_invariants();
    }

    /// Removes every selected item and empties the selection. Returns how
    /// many items were removed.
    pub fn on_delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let before = self.items.len();
        self.items = self.items.remove_by_ids(self.selection.ids());
        self.selection = self.selection.clear();

        let removed = before - self.items.len();
        info!(removed, remaining = self.items.len(), "Deleted selected items");
        self.check_invariants();
        removed
    }

    /// Returns the new column count if it changed.
    pub fn on_resize(&mut self, width: u32) -> Option<usize> {
        self.viewport.observe(width)
    }

    /// Applies queued resize notifications in delivery order. Returns the
    /// column count if any of them changed it.
    pub fn pump_resize(&mut self) -> Option<usize> {
        let widths = match self.resize.as_mut() {
            Some(subscription) => subscription.drain(),
            None => return None,
        };

        widths
            .into_iter()
            .fold(None, |changed, width| self.on_resize(width).or(changed))
    }

    /// Dispatches a single event. Returns whether visible state changed.
    pub fn update(&mut self, message: GalleryMessage) -> bool {
        match message {
            GalleryMessage::Reorder { from, to } => self.on_reorder(from, to),
            GalleryMessage::Toggle { id, checked } => {
                let before = self.selection.clone();
                self.on_toggle(id, checked);
                before != self.selection
            }
            GalleryMessage::DeleteSelected => self.on_delete_selected() > 0,
            GalleryMessage::Resized(width) => self.on_resize(width).is_some(),
        }
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.selection,
            self.selection.prune_to_existing(&self.items.ids()),
            "selection references items that are no longer in the gallery"
        );
    }
}
