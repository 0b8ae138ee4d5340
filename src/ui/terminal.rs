//! Terminal stand-ins for the map, the sidebar, the form and the location
//! source.

use crate::core::create::FormValues;
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, WorkoutKind};
use crate::utils::colors::{color_for_kind, paint};
use crate::utils::table::Table;
use crate::view::{FormSurface, Geolocation, MapView, Sidebar, SidebarEntry};

/// A marker as the terminal map keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Coords,
    pub popup: String,
    pub style_class: String,
}

/// Records what a graphical map would draw.
#[derive(Debug, Default)]
pub struct TerminalMap {
    view: Option<(Coords, u8)>,
    markers: Vec<Marker>,
}

impl TerminalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current center and zoom, once initialized.
    pub fn view(&self) -> Option<(Coords, u8)> {
        self.view
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// One line per marker, colored like its popup.
    pub fn render_markers(&self) -> String {
        let mut out = String::new();
        for m in &self.markers {
            let kind = if m.style_class.starts_with("cycling") {
                WorkoutKind::Cycling
            } else {
                WorkoutKind::Running
            };
            out.push_str(&paint(&format!("📍 {}  {}", m.at, m.popup), color_for_kind(kind)));
            out.push('\n');
        }
        out
    }
}

impl MapView for TerminalMap {
    fn initialize(&mut self, center: Coords, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn is_ready(&self) -> bool {
        self.view.is_some()
    }

    fn place_marker(&mut self, at: Coords, popup_text: &str, style_class: &str) {
        self.markers.push(Marker {
            at,
            popup: popup_text.to_string(),
            style_class: style_class.to_string(),
        });
    }

    fn center_on(&mut self, at: Coords, zoom: u8) {
        self.view = Some((at, zoom));
    }
}

/// The workout list, printed as a table.
#[derive(Debug, Default)]
pub struct TerminalSidebar {
    entries: Vec<SidebarEntry>,
}

impl TerminalSidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let mut table = Table::new([
            "ID",
            "Workout",
            "Distance",
            "Duration",
            "Pace/Speed",
            "Cadence/Climb",
        ]);
        for e in &self.entries {
            let mut row = vec![e.dom_id.clone(), e.title.clone()];
            row.extend(e.details.iter().map(|d| format!("{} {}", d.value, d.unit)));
            table.add_row(row);
        }
        table.render()
    }
}

impl Sidebar for TerminalSidebar {
    fn push_entry(&mut self, entry: SidebarEntry) {
        self.entries.push(entry);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Location source backed by the home position saved with `init`.
pub struct SavedLocation {
    home: Option<Coords>,
}

impl SavedLocation {
    pub fn new(home: Option<Coords>) -> Self {
        Self { home }
    }
}

impl Geolocation for SavedLocation {
    fn current_position(&self) -> AppResult<Coords> {
        self.home.ok_or_else(|| {
            AppError::GeolocationUnavailable(
                "no home location saved (run `rworkoutlog init --lat <LAT> --lng <LNG>`)".into(),
            )
        })
    }
}

/// Form filled from command-line arguments. Only the field row matching
/// the selected type is read, like the hidden row of a real form.
#[derive(Debug, Clone)]
pub struct ArgsForm {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
    layout: WorkoutKind,
    visible: bool,
}

impl ArgsForm {
    pub fn new(kind: &str, distance: &str, duration: &str, cadence: &str, elevation: &str) -> Self {
        Self {
            kind: kind.to_string(),
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: elevation.to_string(),
            layout: WorkoutKind::Running,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn layout(&self) -> WorkoutKind {
        self.layout
    }
}

impl FormSurface for ArgsForm {
    fn values(&self) -> FormValues {
        let (cadence, elevation) = match self.layout {
            WorkoutKind::Running => (self.cadence.clone(), String::new()),
            WorkoutKind::Cycling => (String::new(), self.elevation.clone()),
        };
        FormValues {
            kind: self.kind.clone(),
            distance: self.distance.clone(),
            duration: self.duration.clone(),
            cadence,
            elevation,
        }
    }

    fn reset(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.layout = WorkoutKind::Running;
    }

    fn set_kind(&mut self, kind: WorkoutKind) {
        self.layout = kind;
    }
}
