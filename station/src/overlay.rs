//! The overlay's state container and reducer.
//!
//! ARCHITECTURE
//! ============
//! [`Overlay::apply`] is the only way state changes. It takes one discrete
//! [`Event`] (user input, timer tick, host push, or the result of an earlier
//! host call), mutates the state, and returns the [`Command`]s the shell must
//! execute against the host. Results of those commands come back as events.
//! Nothing here performs I/O, so every transition is deterministic and
//! testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Host failures are logged and never surfaced to the player. Snapshot and
//! batch failures fall back according to [`FallbackPolicy`]; submission and
//! robbery failures only reset their in-flight state.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::HostError;
use crate::batches::BatchBoard;
use crate::events::HostEvent;
use crate::flow::{FlowEvent, SelectionFlow};
use crate::mock;
use crate::model::{Batch, BatchRequest, RecyclingData, RobResponse, StartBatchRequest};
use crate::robbery::{self, RobberyGuard, RobberyStep};

/// Overlay tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    /// Item catalog and start-batch flow.
    #[default]
    Recycle,
    /// Batch list with countdowns, collection and robbery.
    Status,
}

/// What to show when the host cannot deliver data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Substitute the built-in mock snapshot and batch list.
    #[default]
    MockData,
    /// Keep whatever was displayed before.
    KeepStale,
}

/// Where the displayed snapshot came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Host,
    Mock,
}

/// Discrete inputs to the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Host(HostEvent),
    EscapePressed,
    CloseRequested,
    TabSelected(Tab),
    ItemSelected(String),
    SelectionCleared,
    TargetMaterialSelected(String),
    AmountChanged(i64),
    /// Raw text typed into the amount field.
    AmountEntered(String),
    ConfirmRequested,
    ConfirmCancelled,
    SubmitRequested,
    CollectRequested(u32),
    RobRequested(u32),
    CountdownTick,
    RefreshTick,
    SnapshotLoaded(Result<RecyclingData, HostError>),
    BatchesLoaded(Result<Vec<Batch>, HostError>),
    SubmitFinished(Result<(), HostError>),
    CollectFinished(Result<(), HostError>),
    RobCheckFinished { batch_id: u32, result: Result<RobResponse, HostError> },
    RobAttemptFinished { batch_id: u32, result: Result<RobResponse, HostError> },
    HideFrameFinished(Result<(), HostError>),
}

/// Host calls requested by the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `getRecyclingData`
    FetchSnapshot { location_id: u32 },
    /// `getBatches`
    FetchBatches { location_id: u32 },
    /// `startBatchProcessing`
    StartBatch(StartBatchRequest),
    /// `collectBatch`
    CollectBatch(BatchRequest),
    /// `canRobBatch`
    CheckRobbery(BatchRequest),
    /// `attemptRobBatch`
    AttemptRobbery(BatchRequest),
    /// `hideFrame`
    HideFrame,
}

impl Command {
    /// Name of the host callback this command invokes.
    #[must_use]
    pub fn callback(&self) -> &'static str {
        match self {
            Self::FetchSnapshot { .. } => "getRecyclingData",
            Self::FetchBatches { .. } => "getBatches",
            Self::StartBatch(_) => "startBatchProcessing",
            Self::CollectBatch(_) => "collectBatch",
            Self::CheckRobbery(_) => "canRobBatch",
            Self::AttemptRobbery(_) => "attemptRobBatch",
            Self::HideFrame => "hideFrame",
        }
    }
}

/// Complete overlay state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    pub visible: bool,
    pub tab: Tab,
    /// Station requested by the last `showUi`.
    pub requested_location: u32,
    pub snapshot: Option<RecyclingData>,
    pub source: DataSource,
    pub batches: BatchBoard,
    pub selection: SelectionFlow,
    pub robbery: RobberyGuard,
    pub fallback: FallbackPolicy,
}

impl Overlay {
    #[must_use]
    pub fn new(fallback: FallbackPolicy) -> Self {
        Self { fallback, ..Self::default() }
    }

    /// Visible with the status tab open; both batch timers run exactly while this holds.
    #[must_use]
    pub fn status_view_active(&self) -> bool {
        self.visible && self.tab == Tab::Status
    }

    /// Station id used for batch calls, taken from the loaded snapshot.
    #[must_use]
    pub fn location_id(&self) -> Option<u32> {
        self.snapshot.as_ref().map(|data| data.location_id)
    }

    /// Whether the rob button for `batch_id` should be enabled.
    #[must_use]
    pub fn can_rob(&self, batch_id: u32) -> bool {
        let (Some(data), Some(batch)) = (self.snapshot.as_ref(), self.batches.get(batch_id)) else {
            return false;
        };
        !self.robbery.is_robbing() && robbery::eligible(data, batch)
    }

    /// Apply one event and return the host calls it requires.
    pub fn apply(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Host(HostEvent::ShowUi { location_id }) => self.show(location_id),
            Event::Host(HostEvent::HideUi) => {
                self.hide();
                Vec::new()
            }
            Event::EscapePressed => {
                if !self.visible {
                    return Vec::new();
                }
                self.close()
            }
            Event::CloseRequested => self.close(),
            Event::TabSelected(tab) => self.select_tab(tab),
            Event::ItemSelected(key) => self.flow(FlowEvent::ItemSelected(key)),
            Event::SelectionCleared => self.flow(FlowEvent::SelectionCleared),
            Event::TargetMaterialSelected(material) => self.flow(FlowEvent::TargetMaterialSelected(material)),
            Event::AmountChanged(amount) => self.flow(FlowEvent::AmountChanged(amount)),
            Event::AmountEntered(raw) => self.flow(FlowEvent::AmountChanged(crate::pricing::parse_amount(&raw))),
            Event::ConfirmRequested => self.flow(FlowEvent::ConfirmRequested),
            Event::ConfirmCancelled => self.flow(FlowEvent::ConfirmCancelled),
            Event::SubmitRequested => self.flow(FlowEvent::SubmitRequested),
            Event::CollectRequested(batch_id) => self.collect(batch_id),
            Event::RobRequested(batch_id) => self.rob(batch_id),
            Event::CountdownTick => self.countdown_tick(),
            Event::RefreshTick => {
                if !self.status_view_active() {
                    return Vec::new();
                }
                self.fetch_batches()
            }
            Event::SnapshotLoaded(result) => self.snapshot_loaded(result),
            Event::BatchesLoaded(result) => {
                self.batches_loaded(result);
                Vec::new()
            }
            Event::SubmitFinished(result) => self.submit_finished(result),
            Event::CollectFinished(result) => match result {
                Ok(()) => self.fetch_batches(),
                Err(e) => {
                    log::error!("collecting batch failed: {e}");
                    Vec::new()
                }
            },
            Event::RobCheckFinished { batch_id, result } => self.rob_check_finished(batch_id, &result),
            Event::RobAttemptFinished { batch_id, result } => self.rob_attempt_finished(batch_id, &result),
            Event::HideFrameFinished(result) => {
                if let Err(e) = result {
                    log::warn!("hideFrame failed: {e}");
                }
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    fn show(&mut self, location_id: u32) -> Vec<Command> {
        log::info!("opening recycling station #{location_id}");
        if self.location_id().is_some_and(|current| current != location_id) {
            // Another station's data must not flash up while the new one loads.
            self.snapshot = None;
            self.batches.clear();
        }
        self.visible = true;
        self.requested_location = location_id;
        self.selection.reset();
        vec![Command::FetchSnapshot { location_id }]
    }

    fn hide(&mut self) {
        self.visible = false;
        self.selection.reset();
    }

    fn close(&mut self) -> Vec<Command> {
        self.hide();
        vec![Command::HideFrame]
    }

    fn select_tab(&mut self, tab: Tab) -> Vec<Command> {
        let changed = self.tab != tab;
        self.tab = tab;
        if changed && self.status_view_active() {
            return self.fetch_batches();
        }
        Vec::new()
    }

    // =========================================================================
    // Selection flow
    // =========================================================================

    fn flow(&mut self, event: FlowEvent) -> Vec<Command> {
        let Some(data) = self.snapshot.as_ref() else {
            return Vec::new();
        };
        self.selection.apply(event, data).map(Command::StartBatch).into_iter().collect()
    }

    fn submit_finished(&mut self, result: Result<(), HostError>) -> Vec<Command> {
        let Some(data) = self.snapshot.as_ref() else {
            return Vec::new();
        };
        match result {
            Ok(()) => {
                let location_id = data.location_id;
                self.selection.apply(FlowEvent::SubmitSucceeded, data);
                vec![Command::FetchSnapshot { location_id }]
            }
            Err(e) => {
                log::error!("starting batch processing failed: {e}");
                self.selection.apply(FlowEvent::SubmitFailed, data);
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Snapshot and batches
    // =========================================================================

    fn fetch_batches(&self) -> Vec<Command> {
        self.location_id()
            .map(|location_id| Command::FetchBatches { location_id })
            .into_iter()
            .collect()
    }

    fn snapshot_loaded(&mut self, result: Result<RecyclingData, HostError>) -> Vec<Command> {
        match result {
            Ok(data) => {
                self.snapshot = Some(data);
                self.source = DataSource::Host;
            }
            Err(e) => {
                log::error!("fetching recycling data failed: {e}");
                match self.fallback {
                    FallbackPolicy::MockData => {
                        self.snapshot = Some(mock::snapshot(self.requested_location.max(1)));
                        self.source = DataSource::Mock;
                    }
                    FallbackPolicy::KeepStale => {}
                }
            }
        }
        if self.status_view_active() {
            return self.fetch_batches();
        }
        Vec::new()
    }

    fn batches_loaded(&mut self, result: Result<Vec<Batch>, HostError>) {
        match result {
            Ok(batches) => self.batches.reconcile(batches),
            Err(e) => {
                log::error!("fetching batches failed: {e}");
                if self.fallback == FallbackPolicy::MockData {
                    self.batches.reconcile(mock::batches());
                }
            }
        }
    }

    fn countdown_tick(&mut self) -> Vec<Command> {
        if !self.status_view_active() || !self.batches.has_incomplete() {
            return Vec::new();
        }
        let outcome = self.batches.tick();
        if outcome.needs_repoll() {
            log::debug!("batches {:?} finished locally, re-polling", outcome.completed);
            return self.fetch_batches();
        }
        Vec::new()
    }

    fn collect(&self, batch_id: u32) -> Vec<Command> {
        let Some(location_id) = self.location_id() else {
            return Vec::new();
        };
        let collectable = self
            .batches
            .get(batch_id)
            .is_some_and(|batch| batch.reported.is_owner && batch.echo_completed);
        if !collectable {
            return Vec::new();
        }
        vec![Command::CollectBatch(BatchRequest { batch_id, location_id })]
    }

    // =========================================================================
    // Robbery
    // =========================================================================

    fn rob(&mut self, batch_id: u32) -> Vec<Command> {
        if !self.can_rob(batch_id) {
            return Vec::new();
        }
        let Some(location_id) = self.location_id() else {
            return Vec::new();
        };
        if !self.robbery.begin(batch_id) {
            return Vec::new();
        }
        vec![Command::CheckRobbery(BatchRequest { batch_id, location_id })]
    }

    fn rob_check_finished(&mut self, batch_id: u32, result: &Result<RobResponse, HostError>) -> Vec<Command> {
        if let Err(e) = result {
            log::warn!("robbery check for batch {batch_id} failed: {e}");
        }
        match self.robbery.check_resolved(batch_id, result) {
            RobberyStep::Attempt => match self.location_id() {
                Some(location_id) => vec![Command::AttemptRobbery(BatchRequest { batch_id, location_id })],
                None => {
                    // Without a station there is nothing to attempt against.
                    self.robbery = RobberyGuard::default();
                    Vec::new()
                }
            },
            RobberyStep::Succeeded | RobberyStep::Abandoned | RobberyStep::Ignored => Vec::new(),
        }
    }

    fn rob_attempt_finished(&mut self, batch_id: u32, result: &Result<RobResponse, HostError>) -> Vec<Command> {
        if let Err(e) = result {
            log::warn!("robbery attempt on batch {batch_id} failed: {e}");
        }
        match self.robbery.attempt_resolved(batch_id, result) {
            RobberyStep::Succeeded => self.fetch_batches(),
            RobberyStep::Attempt | RobberyStep::Abandoned | RobberyStep::Ignored => Vec::new(),
        }
    }
}
