use crate::app::{Detail, Route, SearchRequest};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use travel_model::SearchResults;

#[derive(Debug)]
pub(super) enum Action {
    Search(SearchRequest),
    FetchDetail(Route),
    SearchFetched {
        generation: u64,
        result: anyhow::Result<SearchResults>,
    },
    DetailFetched {
        generation: u64,
        route: Route,
        result: anyhow::Result<Detail>,
    },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
