use super::*;

impl App {
    /// Switches to `route`. Returns `true` when the new route needs its
    /// entity fetched, i.e. it is a detail route with a different identifier.
    pub fn navigate_to(&mut self, route: Route) -> bool {
        if route == self.route {
            return false;
        }

        self.start_detail_fetch();
        self.route = route;
        self.status_message = None;

        self.route != Route::Home
    }

    pub fn go_home(&mut self) {
        self.navigate_to(Route::Home);
    }

    /// Re-fetch the entity shown by the current detail view.
    pub fn reload_detail(&mut self) -> Option<Route> {
        if self.route == Route::Home {
            return None;
        }
        self.start_detail_fetch();
        Some(self.route.clone())
    }

    /// Opens the highlighted search result, returning the route to fetch.
    pub fn open_selected_result(&mut self) -> Option<Route> {
        let entry = self.result_entries().into_iter().nth(self.selected_result)?;
        if self.navigate_to(entry.route) {
            Some(self.route.clone())
        } else {
            None
        }
    }

    pub fn select_next_result(&mut self) {
        let count = self.result_entries().len();
        if count > 0 && self.selected_result + 1 < count {
            self.selected_result += 1;
        }
    }

    pub fn select_previous_result(&mut self) {
        self.selected_result = self.selected_result.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_results, type_and_settle};
    use super::*;
    use travel_model::{City, DocumentId};

    fn app_with_results() -> App {
        let mut app = App::new("http://localhost:3001");
        let request = type_and_settle(&mut app, "Par");
        app.search_finished(request.generation, Ok(sample_results()));
        app
    }

    #[test]
    fn opening_a_result_starts_loading_its_detail() {
        let mut app = app_with_results();
        app.select_next_result();

        let route = app.open_selected_result().unwrap();
        assert_eq!(route, Route::Country("6650a1000000000000000001".to_string()));
        assert_eq!(app.route, route);
        assert_eq!(app.detail, DetailState::Loading);
        assert!(app.is_loading());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with_results();
        app.select_previous_result();
        assert_eq!(app.selected_result, 0);
        for _ in 0..10 {
            app.select_next_result();
        }
        assert_eq!(app.selected_result, 2);
    }

    #[test]
    fn same_route_does_not_refetch() {
        let mut app = app_with_results();
        let route = app.open_selected_result().unwrap();
        assert!(!app.navigate_to(route));
    }

    #[test]
    fn detail_response_for_other_route_is_ignored() {
        let mut app = app_with_results();
        let hotel_route = app.open_selected_result().unwrap();
        let hotel_generation = app.detail_generation();

        app.go_home();
        let city_id = "6650b1000000000000000001".to_string();
        assert!(app.navigate_to(Route::City(city_id.clone())));

        app.detail_finished(hotel_generation, hotel_route, Err(anyhow::anyhow!("late")));
        assert_eq!(app.detail, DetailState::Loading);

        let city = City {
            id: DocumentId::parse(&city_id).unwrap(),
            name: "Paris".to_string(),
        };
        app.detail_finished(
            app.detail_generation(),
            Route::City(city_id),
            Ok(Detail::City(city.clone())),
        );
        assert_eq!(app.detail, DetailState::Loaded(Detail::City(city)));
    }

    #[test]
    fn failed_detail_shows_generic_message() {
        let mut app = app_with_results();
        let route = app.open_selected_result().unwrap();
        app.detail_finished(
            app.detail_generation(),
            route,
            Err(anyhow::anyhow!("GET /hotels/:id returned error")),
        );
        assert_eq!(
            app.detail,
            DetailState::Failed("Error fetching hotel data.".to_string())
        );
    }

    #[test]
    fn superseded_response_for_same_route_is_ignored() {
        let mut app = app_with_results();
        let route = app.open_selected_result().unwrap();
        let first = app.detail_generation();

        assert_eq!(app.reload_detail(), Some(route.clone()));
        app.detail_finished(first, route.clone(), Err(anyhow::anyhow!("late")));
        assert_eq!(app.detail, DetailState::Loading);

        app.go_home();
        assert!(app.navigate_to(route.clone()));
        app.detail_finished(first + 1, route.clone(), Err(anyhow::anyhow!("late")));
        assert_eq!(app.detail, DetailState::Loading);

        app.detail_finished(app.detail_generation(), route, Err(anyhow::anyhow!("down")));
        assert_eq!(
            app.detail,
            DetailState::Failed("Error fetching hotel data.".to_string())
        );
    }

    #[test]
    fn going_home_keeps_search_results() {
        let mut app = app_with_results();
        app.open_selected_result().unwrap();
        app.go_home();
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.result_entries().len(), 3);
        assert!(!app.is_loading());
    }
}
