use std::time::Instant;

use tokio::task::AbortHandle;
use travel_model::SearchResults;

mod navigation;
mod search;
mod state;

pub use search::{SearchPhase, SearchRequest, SearchState};
pub use state::{Detail, DetailState, ResultEntry, Route, TextInput};

pub struct App {
    pub running: bool,
    pub route: Route,
    pub status_message: Option<String>,
    pub api_url: String,

    // Home view
    pub search_input: TextInput,
    pub search: SearchState,
    pub selected_result: usize,

    // Detail views
    pub detail: DetailState,
    detail_generation: u64,

    // Loading indicator
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    search_task: Option<AbortHandle>,
    detail_task: Option<AbortHandle>,
}

impl App {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            running: true,
            route: Route::Home,
            status_message: None,
            api_url: api_url.into(),
            search_input: TextInput::new(),
            search: SearchState::default(),
            selected_result: 0,
            detail: DetailState::Loading,
            detail_generation: 0,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            search_task: None,
            detail_task: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn is_loading(&self) -> bool {
        let detail_loading = self.route != Route::Home && self.detail == DetailState::Loading;
        self.search.is_in_flight() || detail_loading
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.search_input_changed(Instant::now());
    }

    pub fn search_input_backspace(&mut self) {
        let before = self.search_input.value.len();
        self.search_input.backspace();
        if self.search_input.value.len() != before {
            self.search_input_changed(Instant::now());
        }
    }

    /// Ctrl+X: empties the input and resets the search to idle.
    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.cancel_search_task();
        self.search.clear();
        self.selected_result = 0;
        self.status_message = None;
    }

    fn search_input_changed(&mut self, now: Instant) {
        self.cancel_search_task();
        self.search.input_changed(&self.search_input.value, now);
        self.selected_result = 0;
    }

    /// Remembers the task serving the latest search so the next input change
    /// can cancel it.
    pub fn track_search_task(&mut self, handle: AbortHandle) {
        self.cancel_search_task();
        self.search_task = Some(handle);
    }

    pub fn track_detail_task(&mut self, handle: AbortHandle) {
        self.cancel_detail_task();
        self.detail_task = Some(handle);
    }

    fn cancel_search_task(&mut self) {
        if let Some(handle) = self.search_task.take() {
            handle.abort();
        }
    }

    fn cancel_detail_task(&mut self) {
        if let Some(handle) = self.detail_task.take() {
            handle.abort();
        }
    }

    pub fn search_finished(&mut self, generation: u64, result: anyhow::Result<SearchResults>) {
        match result {
            Ok(results) => {
                if self.search.complete(generation, results) {
                    self.search_task = None;
                    self.status_message = None;
                    self.clamp_selected_result();
                }
            }
            Err(err) => {
                if self.search.fail(generation) {
                    self.search_task = None;
                    self.set_status(format!("Search failed: {:#}", err));
                }
            }
        }
    }

    /// Bumped on every navigation and reload. A detail response is only
    /// applied if it carries the current value.
    pub fn detail_generation(&self) -> u64 {
        self.detail_generation
    }

    fn start_detail_fetch(&mut self) {
        self.cancel_detail_task();
        self.detail_generation += 1;
        self.detail = DetailState::Loading;
    }

    /// Applies a detail response if it belongs to the latest fetch for the
    /// route still on screen.
    pub fn detail_finished(
        &mut self,
        generation: u64,
        route: Route,
        result: anyhow::Result<Detail>,
    ) {
        if generation != self.detail_generation || route != self.route {
            return;
        }
        self.detail_task = None;
        self.detail = match result {
            Ok(detail) => DetailState::Loaded(detail),
            Err(_) => DetailState::Failed(format!(
                "Error fetching {} data.",
                route.kind().unwrap_or("entity")
            )),
        };
    }

    /// Search results in display order: hotels, countries, cities.
    pub fn result_entries(&self) -> Vec<ResultEntry> {
        let results = self.search.results();
        let hotels = results.hotels.iter().map(|hotel| ResultEntry {
            label: hotel.hotel_name.clone(),
            route: Route::Hotel(hotel.id.to_string()),
        });
        let countries = results.countries.iter().map(|country| ResultEntry {
            label: country.country.clone(),
            route: Route::Country(country.id.to_string()),
        });
        let cities = results.cities.iter().map(|city| ResultEntry {
            label: city.name.clone(),
            route: Route::City(city.id.to_string()),
        });
        hotels.chain(countries).chain(cities).collect()
    }

    fn clamp_selected_result(&mut self) {
        let count = self.result_entries().len();
        if self.selected_result >= count {
            self.selected_result = count.saturating_sub(1);
        }
    }
}
