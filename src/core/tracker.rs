//! The creation flow and the startup sequence, wired to the store, the
//! snapshot and the views.

use crate::core::create::create_record;
use crate::core::id::IdGenerator;
use crate::core::store::WorkoutStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Coords, Workout, WorkoutId};
use crate::persistence::{KeyValueStore, PersistenceAdapter};
use crate::ui::messages::warning;
use crate::view::{FormSurface, Geolocation, MapView, Sidebar, ViewSynchronizer};

/// Where the creation flow stands between events.
///
/// Validating, rejected and committed are not resting states: `submit`
/// passes through them and reports the result as a [`SubmitOutcome`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowState {
    Idle,
    AwaitingFormInput { coords: Coords },
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays open on the same coordinate.
    Rejected(AppError),
    Committed(WorkoutId),
}

/// What happened during `start`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StartReport {
    pub located: bool,
    pub restored: usize,
    pub discarded_corrupt: bool,
}

pub struct Tracker<S: KeyValueStore, M: MapView, B: Sidebar> {
    store: WorkoutStore,
    persistence: PersistenceAdapter<S>,
    ids: IdGenerator,
    views: ViewSynchronizer<M, B>,
    state: FlowState,
    clear_enabled: bool,
}

impl<S: KeyValueStore, M: MapView, B: Sidebar> Tracker<S, M, B> {
    pub fn new(
        persistence: PersistenceAdapter<S>,
        views: ViewSynchronizer<M, B>,
        ids: IdGenerator,
    ) -> Self {
        Self {
            store: WorkoutStore::new(),
            persistence,
            ids,
            views,
            state: FlowState::Idle,
            clear_enabled: false,
        }
    }

    /// Startup: locate → show map → restore snapshot → replay.
    ///
    /// A missing location leaves the map uninitialized; an unreadable
    /// snapshot is wiped and the tracker starts empty. Only storage I/O
    /// failures are returned.
    pub fn start(&mut self, geo: &dyn Geolocation) -> AppResult<StartReport> {
        let mut report = StartReport::default();

        match geo.current_position() {
            Ok(at) => {
                let zoom = self.views.zoom();
                self.views.map_mut().initialize(at, zoom);
                report.located = true;
            }
            Err(e) => warning(format!("{e}. The map is disabled for this session.")),
        }

        let restored = match self.persistence.load() {
            Ok(records) => records,
            Err(AppError::CorruptData(why)) => {
                warning(format!("Discarding unreadable saved workouts: {why}"));
                self.persistence.wipe()?;
                report.discarded_corrupt = true;
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        for w in &restored {
            self.ids.observe(w.id());
        }
        self.store.restore(restored)?;
        report.restored = self.store.len();

        self.views.render_all(&self.store);
        self.clear_enabled = !self.store.is_empty();
        Ok(report)
    }

    /// A click on the map: hold the coordinate and open the form.
    pub fn map_clicked<F: FormSurface>(&mut self, at: Coords, form: &mut F) -> AppResult<()> {
        if !self.views.map().is_ready() {
            return Err(AppError::MapUnavailable);
        }
        let at = Coords::new(at.lat, at.lng)?;
        self.state = FlowState::AwaitingFormInput { coords: at };
        form.show();
        Ok(())
    }

    /// Form submission. Validation failures come back as
    /// `Ok(SubmitOutcome::Rejected)`; storage failures as `Err`, with the
    /// store rolled back and nothing rendered.
    pub fn submit<F: FormSurface>(&mut self, form: &mut F) -> AppResult<SubmitOutcome> {
        let FlowState::AwaitingFormInput { coords } = self.state else {
            return Ok(SubmitOutcome::Rejected(AppError::NoPendingLocation));
        };

        let record = match self.validate(form, coords) {
            Ok(w) => w,
            Err(e) if e.is_input_error() => return Ok(SubmitOutcome::Rejected(e)),
            Err(e) => return Err(e),
        };
        let id = record.id();

        self.store.add(record)?;
        if let Err(e) = self.persistence.save(&self.store) {
            self.store.pop();
            return Err(e);
        }

        if let Some(w) = self.store.last() {
            self.views.render_new(w);
        }
        form.reset();
        form.hide();
        self.state = FlowState::Idle;
        self.clear_enabled = true;
        Ok(SubmitOutcome::Committed(id))
    }

    fn validate<F: FormSurface>(&mut self, form: &F, coords: Coords) -> AppResult<Workout> {
        let draft = form.values().to_draft(coords)?;
        let (id, created_at) = self.ids.mint();
        create_record(&draft, id, created_at)
    }

    /// Clear-all control. Does nothing while the control is disabled.
    /// Returns how many workouts were removed.
    pub fn clear_all(&mut self) -> AppResult<usize> {
        if !self.clear_enabled {
            return Ok(0);
        }
        self.persistence.wipe()?;
        let removed = self.store.len();
        self.store.clear();
        self.views.clear_sidebar();
        self.clear_enabled = false;
        Ok(removed)
    }

    /// A click on a sidebar entry.
    pub fn select_entry(&mut self, dom_id: &str) -> Option<Coords> {
        self.views.resolve_click(&self.store, dom_id)
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn clear_enabled(&self) -> bool {
        self.clear_enabled
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn views(&self) -> &ViewSynchronizer<M, B> {
        &self.views
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }
}
