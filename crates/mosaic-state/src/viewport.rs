//! Viewport width tracking
//!
//! - `columns_for_width` is the breakpoint rule
//! - `ViewportTracker` remembers the last published column count and only
//!   reports a change when the rule yields something different
//! - `ResizeHub` fans window width notifications out to subscribers; a
//!   `ResizeSubscription` unregisters itself when dropped

use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};

use mosaic_config::{Breakpoints, LayoutMode};
use tokio::sync::mpsc;
use tracing::{debug, info};

pub fn columns_for_width(breakpoints: &Breakpoints, width: u32) -> usize {
    breakpoints.columns(breakpoints.mode_for_width(width))
}

#[derive(Debug, Clone)]
pub struct ViewportTracker {
    breakpoints: Breakpoints,
    width: u32,
    columns: usize,
}

impl ViewportTracker {
    pub fn new(breakpoints: Breakpoints, initial_width: u32) -> Self {
        let columns = columns_for_width(&breakpoints, initial_width);
        Self {
            breakpoints,
            width: initial_width,
            columns,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn mode(&self) -> LayoutMode {
        self.breakpoints.mode_for_width(self.width)
    }

    /// Records a new width. Returns the new column count only when it differs
    /// from the last one published.
    pub fn observe(&mut self, width: u32) -> Option<usize> {
        self.width = width;
        let columns = columns_for_width(&self.breakpoints, width);

        if columns == self.columns {
            return None;
        }

        info!(width, from = self.columns, to = columns, "Column count changed");
        self.columns = columns;
        Some(columns)
    }
}

struct Listener {
    id: u64,
    tx: mpsc::UnboundedSender<u32>,
}

#[derive(Default)]
struct HubInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

impl HubInner {
    fn listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        // Listener bookkeeping stays consistent even if a holder panicked
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Source of window resize notifications, owned by the host.
#[derive(Clone, Default)]
pub struct ResizeHub {
    inner: Arc<HubInner>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> ResizeSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();

        self.inner.listeners().push(Listener { id, tx });
        debug!(id, "Resize listener added");

        ResizeSubscription {
            id,
            hub: Arc::clone(&self.inner),
            rx,
        }
    }

    /// Delivers `width` to every live subscriber and returns how many got it.
    pub fn notify(&self, width: u32) -> usize {
        let mut listeners = self.inner.listeners();
        listeners.retain(|listener| listener.tx.send(width).is_ok());
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners().len()
    }
}

impl std::fmt::Debug for ResizeHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A registered resize listener. Dropping it removes the listener from the hub.
pub struct ResizeSubscription {
    id: u64,
    hub: Arc<HubInner>,
    rx: mpsc::UnboundedReceiver<u32>,
}

impl ResizeSubscription {
    pub async fn recv(&mut self) -> Option<u32> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<u32> {
        self.rx.try_recv().ok()
    }

    /// Pending widths in delivery order
    pub fn drain(&mut self) -> Vec<u32> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let id = self.id;
        self.hub.listeners().retain(|listener| listener.id != id);
        debug!(id, "Resize listener removed");
    }
}

impl std::fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("id", &self.id)
            .finish()
    }
}
