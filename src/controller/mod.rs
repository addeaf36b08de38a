//! Search controller
//!
//! Owns the search state and the current result set, and turns view events
//! into requests against the directory service. Searches are fire-and-forget:
//! nothing in flight is ever cancelled, so when two searches overlap the one
//! that resolves last wins. `search.discard_stale_responses` opts into a
//! sequence check that drops responses older than the latest dispatch.

mod debounce;
mod view;

pub use debounce::Debouncer;
pub use view::{CloseTrigger, Facets, View};

use crate::api::{DirectoryApi, PersonType};
use crate::config::{SearchSettings, Settings};
use crate::error::ApiError;
use crate::render::Renderer;
use crate::results::ResultSet;
use crate::search::{ModeTransition, SearchMode, SearchRequest, SearchState, SortKey};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Notice shown when AI mode is requested but its dependencies are not ready
pub const AI_UNAVAILABLE_NOTICE: &str =
    "AI search is not available right now. The search index or embedding service is not ready.";

/// Mediates between view events and the directory service
pub struct SearchController {
    api: Arc<dyn DirectoryApi>,
    view: Arc<dyn View>,
    renderer: Renderer,
    settings: SearchSettings,
    session: Mutex<Session>,
    debouncer: Debouncer,
    sequence: AtomicU64,
}

/// Selections and the results they produced. Storing, sorting and rendering
/// results all happen with this lock held.
#[derive(Default)]
struct Session {
    search: SearchState,
    /// Last result set in service order; `None` before the first search or after a failure
    results: Option<ResultSet>,
}

impl SearchController {
    pub fn new(
        api: Arc<dyn DirectoryApi>,
        view: Arc<dyn View>,
        settings: &Settings,
    ) -> anyhow::Result<Arc<Self>> {
        Ok(Arc::new(Self {
            api,
            view,
            renderer: Renderer::new(settings.ui.clone())?,
            settings: settings.search.clone(),
            session: Mutex::new(Session::default()),
            debouncer: Debouncer::new(Duration::from_millis(settings.search.debounce_ms)),
            sequence: AtomicU64::new(0),
        }))
    }

    /// Copy of the current state
    pub fn state(&self) -> SearchState {
        self.session.lock().unwrap().search.clone()
    }

    /// Current result set with the active sort applied
    pub fn results(&self) -> Option<ResultSet> {
        let session = self.session.lock().unwrap();
        let sort = session.search.sort();
        session.results.clone().map(|results| results.sorted(sort))
    }

    /// Page load: probe AI capabilities, load filter facets, run the first search
    pub async fn init(self: &Arc<Self>) {
        let available = self.probe_capabilities().await;
        self.session.lock().unwrap().search.set_ai_available(available);
        self.view.set_ai_available(available);

        self.load_facets().await;
        self.run_search().await;
    }

    /// Semantic mode is available only when every dependency reports ready.
    /// Probe failures fail closed.
    pub async fn probe_capabilities(&self) -> bool {
        match self.api.ai_status().await {
            Ok(status) => {
                let ready = status.semantic_ready();
                info!(
                    "AI status: semantic={} embeddings={} index={} ({} entries) -> available={}",
                    status.semantic_search_available,
                    status.embeddings_configured,
                    status.index_loaded,
                    status.index_count,
                    ready
                );
                ready
            }
            Err(e) => {
                warn!("AI status probe failed, semantic search disabled: {}", e);
                false
            }
        }
    }

    async fn load_facets(&self) {
        let (stats, units, tags) =
            futures::join!(self.api.stats(), self.api.units(), self.api.tags());

        let facets = Facets {
            stats: stats
                .map_err(|e| warn!("Failed to load directory stats: {}", e))
                .ok(),
            units: units
                .map_err(|e| warn!("Failed to load units: {}", e))
                .unwrap_or_default(),
            tags: tags
                .map_err(|e| warn!("Failed to load tags: {}", e))
                .unwrap_or_default(),
        };
        self.view.show_facets(&facets);
    }

    /// Free-text input. Searches once typing pauses for the debounce delay.
    pub fn on_query_input(self: &Arc<Self>, text: &str) {
        self.session.lock().unwrap().search.set_query(text);

        let this = Arc::clone(self);
        self.debouncer.schedule(async move {
            this.dispatch();
        });
    }

    /// Search button or Enter: search now, dropping any pending debounce
    pub fn on_submit(self: &Arc<Self>) -> JoinHandle<()> {
        self.debouncer.cancel();
        self.dispatch()
    }

    pub fn on_type_changed(self: &Arc<Self>, person_type: Option<PersonType>) -> JoinHandle<()> {
        let snapshot = {
            let mut session = self.session.lock().unwrap();
            session.search.set_person_type(person_type);
            session.search.clone()
        };
        // The unit selector may have been reset
        self.view.sync_controls(&snapshot);
        self.dispatch()
    }

    pub fn on_unit_changed(self: &Arc<Self>, unit: Option<String>) -> JoinHandle<()> {
        self.session.lock().unwrap().search.set_unit(unit);
        self.dispatch()
    }

    pub fn on_tag_toggled(self: &Arc<Self>, tag: &str, checked: bool) -> JoinHandle<()> {
        self.session.lock().unwrap().search.set_tag(tag, checked);
        self.dispatch()
    }

    /// Re-order the current results in place; no request is made
    pub fn on_sort_changed(&self, sort: Option<SortKey>) {
        let mut session = self.session.lock().unwrap();
        session.search.set_sort(sort);
        if let Some(results) = session.results.clone() {
            self.show_result_set(results.sorted(sort));
        }
    }

    /// AI-mode toggle. Returns the search started by a successful mode change.
    pub fn on_ai_toggle(self: &Arc<Self>, enabled: bool) -> Option<JoinHandle<()>> {
        let transition = self.session.lock().unwrap().search.request_ai_mode(enabled);

        if transition == ModeTransition::Rejected {
            info!("AI mode requested while unavailable");
            self.view.set_ai_toggle(false);
            self.view.show_notice(AI_UNAVAILABLE_NOTICE);
            return None;
        }
        if !transition.changed() {
            return None;
        }

        debug!("Search mode changed: {:?}", transition);
        self.view.clear_summary();
        Some(self.dispatch())
    }

    /// Reset query and filters, then search immediately
    pub fn on_clear_filters(self: &Arc<Self>) -> JoinHandle<()> {
        self.debouncer.cancel();
        let snapshot = {
            let mut session = self.session.lock().unwrap();
            session.search.clear_filters();
            session.search.clone()
        };
        self.view.sync_controls(&snapshot);
        self.dispatch()
    }

    /// Card click: fetch the full profile and open the modal
    pub fn on_card_click(self: &Arc<Self>, id: i64) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.open_profile(id).await })
    }

    /// Fetch and show one profile. Failures are logged only; the modal stays closed.
    pub async fn open_profile(&self, id: i64) {
        let person = match self.api.person(id).await {
            Ok(person) => person,
            Err(e) => {
                error!("Failed to load profile {}: {}", id, e);
                return;
            }
        };

        let html = match self.renderer.profile(&person) {
            Ok(html) => html,
            Err(e) => {
                error!("Template error rendering profile {}: {}", id, e);
                return;
            }
        };

        self.session.lock().unwrap().search.set_open_profile(Some(id));
        self.view.open_modal(&html);
        self.view.set_scroll_locked(true);
    }

    /// Close button, backdrop click or Escape. Returns whether a modal was open.
    pub fn on_modal_close(&self, trigger: CloseTrigger) -> bool {
        let closed = {
            let mut session = self.session.lock().unwrap();
            let closed = session.search.open_profile();
            session.search.set_open_profile(None);
            closed
        };
        let Some(id) = closed else {
            return false;
        };

        debug!("Closing profile {} via {:?}", id, trigger);
        self.view.close_modal();
        self.view.set_scroll_locked(false);
        true
    }

    /// Start a search for the current state on its own task
    pub fn dispatch(self: &Arc<Self>) -> JoinHandle<()> {
        let (request, seq) = self.begin_search();
        let this = Arc::clone(self);
        tokio::spawn(async move { this.execute(request, seq).await })
    }

    /// Run a search for the current state and wait for it to render
    pub async fn run_search(&self) {
        let (request, seq) = self.begin_search();
        self.execute(request, seq).await;
    }

    fn begin_search(&self) -> (SearchRequest, u64) {
        let (request, seq) = {
            let session = self.session.lock().unwrap();
            let request = session.search.build_request(&self.settings);
            (request, self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
        };

        let mode = if request.is_semantic() {
            SearchMode::Semantic
        } else {
            SearchMode::Lexical
        };
        match self.renderer.loading(mode) {
            Ok(html) => self.view.show_loading(&html),
            Err(e) => error!("Template error rendering loading state: {}", e),
        }

        debug!("Dispatching {} search #{}: {:?}", mode, seq, request);
        (request, seq)
    }

    async fn execute(&self, request: SearchRequest, seq: u64) {
        let outcome = match request {
            SearchRequest::Lexical(ref query) => self
                .api
                .search(query)
                .await
                .map(|body| ResultSet::lexical(body.results)),
            SearchRequest::Semantic(ref query) => {
                self.api
                    .semantic_search(query)
                    .await
                    .and_then(|body| match body.error {
                        Some(message) => Err(ApiError::Service(format!(
                            "AI search error: {}",
                            message
                        ))),
                        None => Ok(ResultSet::semantic(body.results, body.ai_summary)),
                    })
            }
        };

        let mut session = self.session.lock().unwrap();
        if self.is_stale(seq) {
            debug!("Discarding response for superseded search #{}", seq);
            return;
        }

        match outcome {
            Ok(results) => {
                info!("Search #{} returned {} results", seq, results.len());
                self.show_result_set(results.clone().sorted(session.search.sort()));
                session.results = Some(results);
            }
            Err(e) => {
                warn!("Search #{} failed: {}", seq, e);
                session.results = None;
                self.show_error(&e.user_message());
            }
        }
    }

    /// Only meaningful with the session lock held, since dispatches bump the sequence under it
    fn is_stale(&self, seq: u64) -> bool {
        self.settings.discard_stale_responses && seq != self.sequence.load(Ordering::SeqCst)
    }

    fn show_result_set(&self, results: ResultSet) {
        let html = match self.renderer.results(&results) {
            Ok(html) => html,
            Err(e) => {
                error!("Template error rendering results: {}", e);
                self.show_error("Could not display results.");
                return;
            }
        };
        self.view
            .show_results(&results.count_label(), &html, &results);

        match results.ai_summary() {
            Some(summary) => match self.renderer.summary(summary) {
                Ok(html) => self.view.show_summary(&html),
                Err(e) => error!("Template error rendering AI summary: {}", e),
            },
            None => self.view.clear_summary(),
        }
    }

    fn show_error(&self, message: &str) {
        self.view.clear_summary();
        match self.renderer.error(message) {
            Ok(html) => self.view.show_error(&html, message),
            Err(e) => error!("Template error rendering error state: {}", e),
        }
    }
}
