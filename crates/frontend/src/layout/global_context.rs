use crate::domain::a001_movie::store::MoviesStore;
use crate::domain::a002_category::store::CategoriesStore;
use crate::layout::notification_service::NotificationService;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

/// Application-wide state, created once in `App` and shared through context.
///
/// The two entity stores are independent; a page that needs the other
/// entity for a picker asks that store to fetch.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    pub movies: MoviesStore,
    pub categories: CategoriesStore,
    pub notifications: NotificationService,
    pub search_debounce_ms: u32,
}

impl CatalogStore {
    pub fn new(config: &AppConfig) -> Self {
        let api_base = config.api_base();
        log::info!("API base: {}", api_base);
        Self {
            movies: MoviesStore::new(api_base.clone()),
            categories: CategoriesStore::new(api_base),
            notifications: NotificationService::new(),
            search_debounce_ms: config.search.debounce_ms,
        }
    }
}

pub fn use_catalog() -> CatalogStore {
    use_context::<CatalogStore>().expect("CatalogStore not provided in context")
}
