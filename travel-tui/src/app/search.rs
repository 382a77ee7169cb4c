//! Debounced search state machine for the home view.
//!
//! Every input change bumps a generation counter. A request is only issued
//! once the input has been quiet for [`DEBOUNCE`], and a response is only
//! applied if it carries the current generation, so a slow response can
//! never overwrite results for newer input.

use std::time::{Duration, Instant};

use travel_model::SearchResults;

pub const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No query.
    Idle,
    /// Waiting for the quiet period to elapse or for the response.
    Pending,
    /// Results for the latest query are shown.
    Populated,
    /// Explicitly reset by the user.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone)]
struct Debounced {
    query: String,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    generation: u64,
    phase: SearchPhase,
    debounced: Option<Debounced>,
    in_flight: Option<u64>,
    results: SearchResults,
    show_clear: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            generation: 0,
            phase: SearchPhase::Idle,
            debounced: None,
            in_flight: None,
            results: SearchResults::default(),
            show_clear: false,
        }
    }
}

impl SearchState {
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The clear affordance appears once a response has arrived and stays
    /// until the input is emptied or cleared.
    pub fn can_clear(&self) -> bool {
        self.show_clear
    }

    /// Records a new input value. An empty value clears all results at once
    /// and schedules nothing.
    pub fn input_changed(&mut self, value: &str, now: Instant) {
        self.generation += 1;
        self.in_flight = None;

        if value.is_empty() {
            self.debounced = None;
            self.results = SearchResults::default();
            self.show_clear = false;
            self.phase = SearchPhase::Idle;
            return;
        }

        self.debounced = Some(Debounced {
            query: value.to_string(),
            due: now + DEBOUNCE,
        });
        self.phase = SearchPhase::Pending;
    }

    /// Returns the request to issue once the quiet period is over. Yields at
    /// most one request per input change.
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        if now < self.debounced.as_ref()?.due {
            return None;
        }

        let debounced = self.debounced.take()?;
        self.in_flight = Some(self.generation);
        Some(SearchRequest {
            generation: self.generation,
            query: debounced.query,
        })
    }

    /// Applies a response. Returns `false` and leaves state untouched when the
    /// response belongs to a superseded generation.
    pub fn complete(&mut self, generation: u64, results: SearchResults) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        self.in_flight = None;
        self.results = results;
        self.show_clear = true;
        self.phase = SearchPhase::Populated;
        true
    }

    /// Marks the current request as failed, keeping the previous results.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        self.in_flight = None;
        self.phase = if self.results.is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Populated
        };
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.debounced = None;
        self.in_flight = None;
        self.results = SearchResults::default();
        self.show_clear = false;
        self.phase = SearchPhase::Cleared;
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation && self.in_flight == Some(generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_model::{City, DocumentId};

    fn results_with_city(name: &str) -> SearchResults {
        SearchResults {
            cities: vec![City {
                id: DocumentId::parse("6650b1000000000000000001").unwrap(),
                name: name.to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn waits_for_quiet_period() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("P", start);
        assert_eq!(search.phase(), SearchPhase::Pending);
        assert_eq!(search.poll(start + Duration::from_millis(100)), None);

        search.input_changed("Pa", start + Duration::from_millis(200));
        assert_eq!(search.poll(start + Duration::from_millis(400)), None);

        let request = search.poll(start + Duration::from_millis(500)).unwrap();
        assert_eq!(request.query, "Pa");
        assert_eq!(request.generation, search.generation());
    }

    #[test]
    fn issues_one_request_per_quiet_period() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("Paris", start);
        assert!(search.poll(start + DEBOUNCE).is_some());
        assert!(search.poll(start + DEBOUNCE * 2).is_none());
        assert!(search.is_in_flight());
    }

    #[test]
    fn applies_current_response() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("Paris", start);
        let request = search.poll(start + DEBOUNCE).unwrap();
        assert!(search.complete(request.generation, results_with_city("Paris")));
        assert_eq!(search.phase(), SearchPhase::Populated);
        assert_eq!(search.results().cities[0].name, "Paris");
        assert!(search.can_clear());
    }

    #[test]
    fn ignores_stale_response() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("Par", start);
        let stale = search.poll(start + DEBOUNCE).unwrap();

        search.input_changed("Berlin", start + DEBOUNCE);
        let fresh = search
            .poll(start + DEBOUNCE * 2 + Duration::from_millis(1))
            .unwrap();

        assert!(search.complete(fresh.generation, results_with_city("Berlin")));
        assert!(!search.complete(stale.generation, results_with_city("Paris")));
        assert_eq!(search.results().cities[0].name, "Berlin");
    }

    #[test]
    fn ignores_response_when_input_changed_after_request() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("Par", start);
        let request = search.poll(start + DEBOUNCE).unwrap();
        search.input_changed("Pari", start + DEBOUNCE);

        assert!(!search.complete(request.generation, results_with_city("Paris")));
        assert!(search.results().is_empty());
        assert_eq!(search.phase(), SearchPhase::Pending);
    }

    #[test]
    fn empty_input_clears_without_request() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("Paris", start);
        let request = search.poll(start + DEBOUNCE).unwrap();
        search.complete(request.generation, results_with_city("Paris"));

        search.input_changed("", start + DEBOUNCE * 2);
        assert!(search.results().is_empty());
        assert_eq!(search.phase(), SearchPhase::Idle);
        assert!(!search.can_clear());
        assert_eq!(search.poll(start + DEBOUNCE * 10), None);
    }

    #[test]
    fn empty_input_drops_pending_request() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("P", start);
        search.input_changed("", start + Duration::from_millis(10));
        assert_eq!(search.poll(start + DEBOUNCE * 2), None);
    }

    #[test]
    fn clear_resets_and_drops_in_flight() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("Paris", start);
        let request = search.poll(start + DEBOUNCE).unwrap();
        search.clear();

        assert_eq!(search.phase(), SearchPhase::Cleared);
        assert!(!search.can_clear());
        assert!(!search.complete(request.generation, results_with_city("Paris")));
        assert!(search.results().is_empty());
    }

    #[test]
    fn failure_keeps_previous_results() {
        let start = Instant::now();
        let mut search = SearchState::default();

        search.input_changed("Paris", start);
        let first = search.poll(start + DEBOUNCE).unwrap();
        search.complete(first.generation, results_with_city("Paris"));

        search.input_changed("Parisx", start + DEBOUNCE);
        let second = search.poll(start + DEBOUNCE * 3).unwrap();
        assert!(search.fail(second.generation));
        assert_eq!(search.phase(), SearchPhase::Populated);
        assert_eq!(search.results().cities[0].name, "Paris");
    }
}
