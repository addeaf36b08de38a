//! Directory search: headless line-driven front end
//!
//! Plain lines are typed into the search box (debounced). Lines starting with
//! `/` are control events; `/help` lists them.

use anyhow::Result;
use directory_search::{
    config,
    controller::{CloseTrigger, Facets, SearchController, View},
    PersonType, RemoteDirectory, ResultSet, SearchState, SortKey,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Prints every view update to stdout
struct TerminalView;

impl View for TerminalView {
    fn show_loading(&self, _html: &str) {
        println!("... searching");
    }

    fn show_results(&self, count_label: &str, _html: &str, results: &ResultSet) {
        println!("== {} ({})", count_label, results.mode());
        for person in results.people() {
            let kind = person.person_type.map(|t| t.label()).unwrap_or("-");
            println!("  [{}] {} - {}", person.id, person.display_name(), kind);
        }
    }

    fn show_error(&self, _html: &str, message: &str) {
        println!("!! {}", message);
    }

    fn show_summary(&self, html: &str) {
        println!("-- AI summary --\n{}", html);
    }

    fn clear_summary(&self) {}

    fn set_ai_available(&self, available: bool) {
        println!("AI search {}", if available { "available" } else { "unavailable" });
    }

    fn set_ai_toggle(&self, enabled: bool) {
        println!("AI mode toggle: {}", if enabled { "on" } else { "off" });
    }

    fn show_notice(&self, message: &str) {
        println!("** {}", message);
    }

    fn sync_controls(&self, state: &SearchState) {
        println!(
            "filters: query={:?} type={:?} unit={:?} tags={:?}",
            state.query(),
            state.person_type(),
            state.unit(),
            state.tags()
        );
    }

    fn show_facets(&self, facets: &Facets) {
        if let Some(ref stats) = facets.stats {
            println!(
                "{} people ({} faculty, {} fellows), {} tags",
                stats.total, stats.faculty, stats.fellows, stats.tags
            );
        }
        let units: Vec<&str> = facets.units.iter().map(|u| u.unit.as_str()).collect();
        if !units.is_empty() {
            println!("units: {}", units.join(", "));
        }
    }

    fn open_modal(&self, html: &str) {
        println!("-- profile --\n{}", html);
    }

    fn close_modal(&self) {
        println!("-- profile closed --");
    }

    fn set_scroll_locked(&self, _locked: bool) {}
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = config::load()?;

    // Initialize logging
    let default_level = if settings.general.debug { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting {} v{} against {}",
        settings.general.instance_name,
        directory_search::VERSION,
        settings.api.base_url
    );

    let api = Arc::new(RemoteDirectory::with_settings(&settings.api)?);
    let controller = SearchController::new(api, Arc::new(TerminalView), &settings)?;
    controller.init().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !handle_line(&controller, &line).await {
            break;
        }
    }

    Ok(())
}

/// Apply one input line. Returns false to quit.
async fn handle_line(controller: &Arc<SearchController>, line: &str) -> bool {
    let Some(command) = line.strip_prefix('/') else {
        controller.on_query_input(line);
        return true;
    };

    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };
    let blank_is_none = |s: &str| (!s.is_empty()).then(|| s.to_string());

    let handle = match name {
        "search" => Some(controller.on_submit()),
        "type" => match type_filter(arg) {
            Some(person_type) => Some(controller.on_type_changed(person_type)),
            None => {
                println!("usage: /type <faculty|fellow|>");
                None
            }
        },
        "unit" => Some(controller.on_unit_changed(blank_is_none(arg))),
        "tag" => Some(controller.on_tag_toggled(arg, true)),
        "untag" => Some(controller.on_tag_toggled(arg, false)),
        "sort" => {
            match sort_choice(arg) {
                Some(sort) => {
                    println!("sort: {}", sort.map(|s| s.as_str()).unwrap_or("server order"));
                    controller.on_sort_changed(sort);
                }
                None => println!("usage: /sort <name|name-desc|>"),
            }
            None
        }
        "ai" => controller.on_ai_toggle(matches!(arg, "on" | "true" | "1")),
        "open" => match arg.parse() {
            Ok(id) => Some(controller.on_card_click(id)),
            Err(_) => {
                println!("usage: /open <id>");
                None
            }
        },
        "close" => {
            controller.on_modal_close(CloseTrigger::CloseButton);
            None
        }
        "backdrop" => {
            controller.on_modal_close(CloseTrigger::Backdrop);
            None
        }
        "escape" => {
            controller.on_modal_close(CloseTrigger::Escape);
            None
        }
        "clear" => Some(controller.on_clear_filters()),
        "quit" | "exit" => return false,
        _ => {
            print_usage();
            None
        }
    };

    // Wait so output stays in input order; the debounced path is never awaited
    if let Some(handle) = handle {
        if let Err(e) = handle.await {
            error!("Task for /{} failed: {}", name, e);
        }
    }
    true
}

/// Empty means any type; `None` when the value is not a known type
fn type_filter(arg: &str) -> Option<Option<PersonType>> {
    if arg.is_empty() {
        return Some(None);
    }
    PersonType::parse_filter(arg).map(Some)
}

/// Empty means server order; `None` when the value is not a known sort key
fn sort_choice(arg: &str) -> Option<Option<SortKey>> {
    if arg.is_empty() {
        return Some(None);
    }
    SortKey::parse(arg).map(Some)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Directory Search v{}

Type text to search as you type, or use:
    /search               Search now
    /type <faculty|fellow|>
    /unit <name>          Empty for any unit
    /tag <name>           Check a tag
    /untag <name>         Uncheck a tag
    /sort <name|name-desc|>
    /ai <on|off>          Toggle AI (semantic) search
    /open <id>            Show a profile
    /close, /backdrop, /escape
                          Close the profile
    /clear                Reset all filters
    /quit

ENVIRONMENT VARIABLES:
    DIRSEARCH_SETTINGS_PATH  Path to settings.yml
    DIRSEARCH_API_URL        Directory service base URL
    DIRSEARCH_DEBUG          Enable debug logging (true/false)
"#,
        directory_search::VERSION
    );
}
