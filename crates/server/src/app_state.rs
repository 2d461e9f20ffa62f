use std::sync::Arc;

use shared::domain::Match;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) results: Arc<Vec<Match>>,
}
