//! Capabilities the core drives without knowing how they are drawn:
//! the map, the sidebar list, the entry form and the location source.

pub mod sync;

pub use sync::ViewSynchronizer;

use crate::core::create::FormValues;
use crate::errors::AppResult;
use crate::models::{Coords, WorkoutKind};

/// Zoom used when the map is first shown and when an entry is selected.
pub const DEFAULT_ZOOM: u8 = 13;

pub trait MapView {
    fn initialize(&mut self, center: Coords, zoom: u8);
    fn is_ready(&self) -> bool;
    fn place_marker(&mut self, at: Coords, popup_text: &str, style_class: &str);
    fn center_on(&mut self, at: Coords, zoom: u8);
}

pub trait Sidebar {
    fn push_entry(&mut self, entry: SidebarEntry);
    fn clear(&mut self);
}

pub trait Geolocation {
    /// Current position, or `GeolocationUnavailable`.
    fn current_position(&self) -> AppResult<Coords>;
}

pub trait FormSurface {
    fn values(&self) -> FormValues;
    fn reset(&mut self);
    fn show(&mut self);
    fn hide(&mut self);
    /// Switch which variant field (cadence / elevation) is visible.
    fn set_kind(&mut self, kind: WorkoutKind);
}

/// One value row of a sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// A rendered workout in the sidebar. `dom_id` is what a click hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub dom_id: String,
    pub kind: WorkoutKind,
    pub title: String,
    pub style_class: &'static str,
    pub details: Vec<Detail>,
}
