use crate::api::ApiClient;
use crate::app::{App, Detail, Route, SearchRequest};
use anyhow::Result;

use super::action_queue::{Action, ActionTx};

pub(super) fn run_action(action: Action, app: &mut App, client: &ApiClient, action_tx: &ActionTx) {
    match action {
        Action::Search(request) => spawn_search(request, app, client, action_tx),
        Action::FetchDetail(route) => spawn_detail_fetch(route, app, client, action_tx),
        Action::SearchFetched { generation, result } => app.search_finished(generation, result),
        Action::DetailFetched {
            generation,
            route,
            result,
        } => app.detail_finished(generation, route, result),
    }
}

/// Requests run in the background; the result comes back through the queue.
fn spawn_search(request: SearchRequest, app: &mut App, client: &ApiClient, action_tx: &ActionTx) {
    let client = client.clone();
    let action_tx = action_tx.clone();
    let task = tokio::spawn(async move {
        let result = client.search(&request.query).await;
        let _ = action_tx.send(Action::SearchFetched {
            generation: request.generation,
            result,
        });
    });
    app.track_search_task(task.abort_handle());
}

fn spawn_detail_fetch(route: Route, app: &mut App, client: &ApiClient, action_tx: &ActionTx) {
    let generation = app.detail_generation();
    let client = client.clone();
    let action_tx = action_tx.clone();
    let task = tokio::spawn(async move {
        let result = fetch_detail(&client, &route).await;
        let _ = action_tx.send(Action::DetailFetched {
            generation,
            route,
            result,
        });
    });
    app.track_detail_task(task.abort_handle());
}

async fn fetch_detail(client: &ApiClient, route: &Route) -> Result<Detail> {
    match route {
        Route::Home => anyhow::bail!("The home view has no detail to fetch"),
        Route::Hotel(id) => client.hotel(id).await.map(Detail::Hotel),
        Route::Country(id) => client.country(id).await.map(Detail::Country),
        Route::City(id) => client.city(id).await.map(Detail::City),
    }
}
