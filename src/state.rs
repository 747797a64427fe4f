//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::ShortenedUrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Host used in short URLs when a request carries no `Host`.
    pub public_host: Arc<str>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, public_host: impl Into<Arc<str>>) -> Self {
        Self {
            link_service,
            public_host: public_host.into(),
        }
    }

    /// Builds state around a repository with default service settings.
    pub fn with_repository(
        repository: Arc<dyn ShortenedUrlRepository>,
        public_host: impl Into<Arc<str>>,
    ) -> Self {
        Self::new(Arc::new(LinkService::new(repository)), public_host)
    }
}
