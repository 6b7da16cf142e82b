use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::data::assets::AssetSource;
use crate::data::loader::load_both;
use crate::data::model::{Dataset, Trajectory};

// ---------------------------------------------------------------------------
// Load status
// ---------------------------------------------------------------------------

/// Both variants' trajectories, ready to chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub corrected: Vec<Trajectory>,
    pub uncorrected: Vec<Trajectory>,
}

/// What the view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Pending,
    Ready(Comparison),
    Failed(String),
}

impl LoadStatus {
    /// Decide the outcome of a load from both variants' datasets.
    ///
    /// Any error at all fails the whole view; messages are listed corrected
    /// variant first, then uncorrected, joined with `"; "`.
    pub fn resolve(corrected: Dataset, uncorrected: Dataset) -> Self {
        let errors: Vec<String> = corrected
            .error_messages()
            .into_iter()
            .chain(uncorrected.error_messages())
            .collect();

        if errors.is_empty() {
            LoadStatus::Ready(Comparison {
                corrected: corrected.trajectories,
                uncorrected: uncorrected.trajectories,
            })
        } else {
            LoadStatus::Failed(errors.join("; "))
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Pending)
    }

    fn describe(&self) -> &'static str {
        match self {
            LoadStatus::Pending => "pending",
            LoadStatus::Ready(_) => "ready",
            LoadStatus::Failed(_) => "failed",
        }
    }
}

/// Load both variants (concurrently) and resolve the outcome.
pub fn load_comparison(source: &dyn AssetSource) -> LoadStatus {
    match load_both(source) {
        Ok((corrected, uncorrected)) => LoadStatus::resolve(corrected, uncorrected),
        Err(msg) => LoadStatus::Failed(msg),
    }
}

// ---------------------------------------------------------------------------
// View state machine
// ---------------------------------------------------------------------------

/// Load status of the chart view plus the in-flight background load.
///
/// `Pending` → `Ready` | `Failed`. Both outcomes are terminal, and the load is
/// started at most once per `ViewState`.
pub struct ViewState {
    status: LoadStatus,
    started: bool,
    in_flight: Option<Receiver<LoadStatus>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            status: LoadStatus::Pending,
            started: false,
            in_flight: None,
        }
    }
}

impl ViewState {
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Start the load on a background thread. Returns `false` if a load was
    /// already started by an earlier activation.
    pub fn activate(&mut self, source: Arc<dyn AssetSource>) -> bool {
        if self.started {
            return false;
        }
        self.started = true;

        let (tx, rx) = mpsc::channel();
        self.in_flight = Some(rx);
        log::info!("loading trajectory datasets");
        std::thread::spawn(move || {
            let _ = tx.send(load_comparison(&*source));
        });
        true
    }

    /// Pick up the background result, if it has arrived. Returns `true` when
    /// the status changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.in_flight else {
            return false;
        };
        let next = match rx.try_recv() {
            Ok(status) => status,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                LoadStatus::Failed("loader stopped before reporting a result".to_string())
            }
        };
        self.in_flight = None;
        self.transition(next);
        true
    }

    fn transition(&mut self, next: LoadStatus) {
        match &next {
            LoadStatus::Failed(msg) => log::error!("load failed: {msg}"),
            other => log::info!("load status: {} -> {}", self.status.describe(), other.describe()),
        }
        self.status = next;
    }
}
