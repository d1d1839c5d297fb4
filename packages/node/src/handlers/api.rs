//! API endpoint — `GET <api_script>?route=<name>`.

use axum::extract::{Query, State};

use super::AppState;
use crate::dispatch::Reply;

/// `<any method> <api_script>?route=<name>`
///
/// Query pairs are taken verbatim, so `?route=` yields the empty route name
/// and no `route` key at all yields `no_route`. If `route` repeats, the last
/// occurrence wins.
pub async fn dispatch(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Reply {
    let route = params
        .iter()
        .rev()
        .find(|(key, _)| key == "route")
        .map(|(_, value)| value.as_str());
    state.dispatcher.handle(route)
}
