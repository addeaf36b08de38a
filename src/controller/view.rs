//! The page the controller drives

use crate::api::{DirectoryStats, TagCount, UnitCount};
use crate::results::ResultSet;
use crate::search::SearchState;

/// Filter choices offered by the directory
#[derive(Debug, Clone, Default)]
pub struct Facets {
    pub stats: Option<DirectoryStats>,
    pub units: Vec<UnitCount>,
    pub tags: Vec<TagCount>,
}

/// How the profile modal was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Output surface of the controller.
///
/// HTML arguments are fully rendered and escaped fragments. Methods are called
/// from spawned tasks, so implementations handle their own synchronization.
pub trait View: Send + Sync {
    /// Replace the result area with the loading indicator
    fn show_loading(&self, html: &str);

    /// Replace the result area with rendered cards (or the no-results placeholder)
    fn show_results(&self, count_label: &str, html: &str, results: &ResultSet);

    /// Replace the result area with an error placeholder
    fn show_error(&self, html: &str, message: &str);

    fn show_summary(&self, html: &str);

    fn clear_summary(&self);

    /// Enable or disable the AI-mode control after the capability probe
    fn set_ai_available(&self, available: bool);

    /// Force the AI-mode toggle to a value
    fn set_ai_toggle(&self, enabled: bool);

    /// Blocking notice, e.g. when AI mode cannot be enabled
    fn show_notice(&self, message: &str);

    /// Bring query box, selectors and checkboxes in line with the state
    fn sync_controls(&self, state: &SearchState);

    fn show_facets(&self, facets: &Facets);

    /// Show the modal with a rendered profile and mark it active
    fn open_modal(&self, html: &str);

    fn close_modal(&self);

    /// Suppress or restore page scrolling behind the modal
    fn set_scroll_locked(&self, locked: bool);
}
