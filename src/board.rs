// src/board.rs
use crate::config::FallbackPolicy;
use crate::demo::demo_postings;
use crate::error::LoadError;
use crate::filter::{filter_jobs, Choice, FilterMode, Selection};
use crate::model::JobPosting;
use crate::sources::SourceCatalog;
use tracing::{info, warn};

/// Connection state of the working set, surfaced to the user as a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The one-shot fetch is still in flight.
    Loading,
    /// Live data from the aggregator endpoint.
    Connected,
    /// Fetch failed; showing the fixed demo dataset.
    Demo,
    /// Fetch failed; showing an honest empty state.
    Disconnected,
}

/// Immutable snapshot published to subscribers after every recompute.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub jobs: Vec<JobPosting>,
    pub status: LoadStatus,
    pub loading: bool,
}

type Subscriber = Box<dyn FnMut(&BoardView)>;

/// State holder for the job board: working set, filter selection and load
/// status. Any mutation synchronously recomputes the derived filtered view
/// and republishes it to subscribers; the filter side never triggers loads.
pub struct JobBoard {
    jobs: Vec<JobPosting>,
    selection: Selection,
    status: LoadStatus,
    loading: bool,
    filtered: Vec<JobPosting>,
    mode: FilterMode,
    fallback: FallbackPolicy,
    sources: SourceCatalog,
    subscribers: Vec<Subscriber>,
}

impl JobBoard {
    pub fn new(mode: FilterMode, fallback: FallbackPolicy, sources: SourceCatalog) -> Self {
        Self {
            jobs: Vec::new(),
            selection: Selection::default(),
            status: LoadStatus::Loading,
            loading: true,
            filtered: Vec::new(),
            mode,
            fallback,
            sources,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback invoked with a fresh snapshot after every state
    /// change, starting with the next one.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&BoardView) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Install the outcome of the one-shot load. Errors are absorbed here:
    /// the configured fallback becomes the working set and the status turns
    /// degraded. The loading flag always ends up false.
    pub fn apply_load_result(&mut self, result: Result<Vec<JobPosting>, LoadError>) {
        match result {
            Ok(jobs) => {
                info!("Adopting {} postings from the live endpoint", jobs.len());
                self.jobs = jobs;
                self.status = LoadStatus::Connected;
            }
            Err(err) => {
                warn!("Job load failed: {}", err);
                match self.fallback {
                    FallbackPolicy::Demo => {
                        self.jobs = demo_postings();
                        self.status = LoadStatus::Demo;
                    }
                    FallbackPolicy::Empty => {
                        self.jobs = Vec::new();
                        self.status = LoadStatus::Disconnected;
                    }
                }
            }
        }
        self.loading = false;
        self.recompute();
    }

    pub fn set_search(&mut self, search: &str) {
        self.selection.search = search.to_string();
        self.recompute();
    }

    pub fn set_category(&mut self, category: Choice) {
        self.selection.category = category;
        self.recompute();
    }

    pub fn set_place(&mut self, place: Choice) {
        self.selection.place = place;
        self.recompute();
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.recompute();
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sources(&self) -> &SourceCatalog {
        &self.sources
    }

    /// Current snapshot: filtered view plus status flags.
    pub fn view(&self) -> BoardView {
        BoardView {
            jobs: self.filtered.clone(),
            status: self.status,
            loading: self.loading,
        }
    }

    fn recompute(&mut self) {
        self.filtered = filter_jobs(&self.jobs, &self.selection, self.mode, &self.sources);
        let view = self.view();
        for subscriber in &mut self.subscribers {
            subscriber(&view);
        }
    }
}
