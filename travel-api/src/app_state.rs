use std::sync::Arc;

use crate::repositories::TravelRepository;

#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn TravelRepository>,
}

impl AppState {
    pub fn new(repository: impl TravelRepository + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub fn repository(&self) -> &dyn TravelRepository {
        self.repository.as_ref()
    }
}
