// File: crates/scatter-core/src/host.rs
// Summary: Host-side stand-ins for the page: mount containers, viewport info and resize observation.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};
use crate::theme::Theme;
use crate::types::{sanitize_dpr, DEFAULT_HEIGHT, NARROW_MAX_HEIGHT, NARROW_VIEWPORT_WIDTH};

/// What a container currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerContent {
    Empty,
    Markup(String),
    Chart,
}

/// Mount target for a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub id: String,
    /// Declarative height hint, e.g. `"320"`.
    pub height_hint: Option<String>,
    /// Measured layout width, in logical pixels.
    pub client_width: f32,
    pub content: ContainerContent,
}

impl Container {
    pub fn new(id: impl Into<String>, client_width: f32) -> Self {
        Self { id: id.into(), height_hint: None, client_width, content: ContainerContent::Empty }
    }

    pub fn with_height_hint(mut self, hint: impl Into<String>) -> Self {
        self.height_hint = Some(hint.into());
        self
    }
}

/// Containers of one page, addressable by id in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Page {
    containers: IndexMap<String, Container>,
}

impl Page {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, container: Container) {
        self.containers.insert(container.id.clone(), container);
    }

    pub fn container(&self, id: &str) -> ChartResult<&Container> {
        self.containers.get(id).ok_or_else(|| ChartError::MissingContainer(id.to_string()))
    }

    pub fn container_mut(&mut self, id: &str) -> ChartResult<&mut Container> {
        self.containers.get_mut(id).ok_or_else(|| ChartError::MissingContainer(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }
}

/// Viewport facts the chart reads at construction and resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, device_pixel_ratio: f32) -> Self {
        Self { width, device_pixel_ratio: sanitize_dpr(device_pixel_ratio) }
    }

    pub fn is_narrow(&self) -> bool { self.width <= NARROW_VIEWPORT_WIDTH }
}

impl Default for Viewport {
    fn default() -> Self { Self::new(1280.0, 1.0) }
}

/// The page a chart mounts into: viewport, resize registry and the active theme.
#[derive(Clone, Debug, Default)]
pub struct Host {
    pub viewport: Viewport,
    pub resize: ResizeObserver,
    pub theme: Theme,
}

impl Host {
    pub fn new(viewport: Viewport, theme: Theme) -> Self {
        Self { viewport, resize: ResizeObserver::new(), theme }
    }
}

/// Chart height from the container hint, capped on narrow viewports. A
/// blank hint counts as missing.
pub fn initial_height(hint: Option<&str>, viewport: &Viewport) -> f32 {
    let base = match hint.map(str::trim).filter(|h| !h.is_empty()) {
        Some(h) => h.parse::<f32>().unwrap_or(f32::NAN),
        None => DEFAULT_HEIGHT,
    };
    if !base.is_finite() {
        return DEFAULT_HEIGHT;
    }
    if viewport.is_narrow() { base.min(NARROW_MAX_HEIGHT) } else { base }
}

#[derive(Debug, Default)]
struct ObserverState {
    next_id: u64,
    targets: BTreeMap<u64, String>,
}

/// Registry of containers whose size changes should be delivered.
///
/// Single-threaded; clones share the same registry.
#[derive(Clone, Debug, Default)]
pub struct ResizeObserver {
    inner: Rc<RefCell<ObserverState>>,
}

impl ResizeObserver {
    pub fn new() -> Self { Self::default() }

    pub fn observe(&self, target: &str) -> ResizeSubscription {
        let mut st = self.inner.borrow_mut();
        let id = st.next_id;
        st.next_id += 1;
        st.targets.insert(id, target.to_string());
        ResizeSubscription { id, target: target.to_string(), state: Rc::downgrade(&self.inner) }
    }

    /// Container ids with at least one live subscription, in subscription order.
    pub fn observed_targets(&self) -> Vec<String> {
        self.inner.borrow().targets.values().cloned().collect()
    }

    pub fn is_observed(&self, target: &str) -> bool {
        self.inner.borrow().targets.values().any(|t| t == target)
    }

    pub fn len(&self) -> usize { self.inner.borrow().targets.len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Live registration; unregisters on drop.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    target: String,
    state: Weak<RefCell<ObserverState>>,
}

impl ResizeSubscription {
    pub fn target(&self) -> &str { &self.target }

    /// Stop receiving notifications.
    pub fn disconnect(self) {
        drop(self)
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(st) = self.state.upgrade() {
            st.borrow_mut().targets.remove(&self.id);
        }
    }
}
