use super::{DEFAULT_ZOOM, Detail, MapView, Sidebar, SidebarEntry};
use crate::core::store::WorkoutStore;
use crate::models::{Coords, Workout, WorkoutDetails, WorkoutId};
use crate::ui::messages::warning;
use crate::utils::formatting::{fmt_metric, fmt_quantity};

/// Projects workouts onto the map and the sidebar, and maps a sidebar
/// click back to a map position.
pub struct ViewSynchronizer<M: MapView, B: Sidebar> {
    map: M,
    sidebar: B,
    zoom: u8,
}

/// Sidebar form of a workout.
pub fn sidebar_entry(w: &Workout) -> SidebarEntry {
    let kind = w.kind();
    let field = match *w.details() {
        WorkoutDetails::Running { cadence, .. } => cadence.to_string(),
        WorkoutDetails::Cycling { elevation_gain, .. } => fmt_quantity(elevation_gain),
    };

    SidebarEntry {
        dom_id: w.id().to_string(),
        kind,
        title: w.description(),
        style_class: kind.entry_class(),
        details: vec![
            Detail {
                icon: kind.icon(),
                value: fmt_quantity(w.distance()),
                unit: "km",
            },
            Detail {
                icon: "⏱",
                value: fmt_quantity(w.duration()),
                unit: "min",
            },
            Detail {
                icon: "⚡",
                value: fmt_metric(w.metric()),
                unit: kind.metric_unit(),
            },
            Detail {
                icon: kind.field_icon(),
                value: field,
                unit: kind.field_unit(),
            },
        ],
    }
}

/// Popup text of the map marker, e.g. "🏃 Running on 07/3/2026".
pub fn popup_text(w: &Workout) -> String {
    format!("{} {}", w.kind().icon(), w.description())
}

impl<M: MapView, B: Sidebar> ViewSynchronizer<M, B> {
    pub fn new(map: M, sidebar: B) -> Self {
        Self {
            map,
            sidebar,
            zoom: DEFAULT_ZOOM,
        }
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn sidebar(&self) -> &B {
        &self.sidebar
    }

    /// Sidebar entry plus map marker for one record. Markers need a ready
    /// map; before that only the sidebar is filled.
    pub fn render_new(&mut self, w: &Workout) {
        self.sidebar.push_entry(sidebar_entry(w));
        if self.map.is_ready() {
            let kind = w.kind();
            self.map.place_marker(w.coords(), &popup_text(w), kind.popup_class());
        }
    }

    /// Replay every stored record in creation order.
    pub fn render_all(&mut self, store: &WorkoutStore) {
        for w in store.all() {
            self.render_new(w);
        }
    }

    /// Resolve a sidebar id to its coordinate and recenter the map there.
    /// Ids that do not parse or resolve are ignored.
    pub fn resolve_click(&mut self, store: &WorkoutStore, dom_id: &str) -> Option<Coords> {
        let found = dom_id
            .parse::<WorkoutId>()
            .ok()
            .and_then(|id| store.find_by_id(id).ok());

        let Some(w) = found else {
            warning(format!("No workout matches entry '{dom_id}'"));
            return None;
        };

        let at = w.coords();
        if self.map.is_ready() {
            self.map.center_on(at, self.zoom);
        }
        Some(at)
    }

    /// Empty the sidebar. The map has no marker removal; placed markers
    /// stay until the next start.
    pub fn clear_sidebar(&mut self) {
        self.sidebar.clear();
    }
}
