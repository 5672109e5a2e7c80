//! Category store
//!
//! Same contract as the movie store, plus the unpaginated list of every
//! category that feeds the movie form's picker.

use contracts::domain::a002_category::aggregate::{Category, CategoryPayload};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

use super::api;
use crate::shared::api_utils::ApiError;
use crate::shared::list_state::{CollectionState, ListState};

pub const LOAD_ERROR: &str = "Error al cargar categorías";

#[derive(Clone, Copy)]
pub struct CategoriesStore {
    pub state: RwSignal<ListState<Category>>,
    /// Every category, for relationship pickers
    pub all: RwSignal<CollectionState<Category>>,
    api_base: StoredValue<String>,
}

impl CategoriesStore {
    pub fn new(api_base: String) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            all: RwSignal::new(CollectionState::default()),
            api_base: StoredValue::new(api_base),
        }
    }

    pub async fn fetch_list(self, page: u32, name: String) {
        let Some(ticket) = self.state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let result = api::fetch_categories(&self.api_base.get_value(), page, &name).await;
        self.state.update(|s| {
            s.finish_fetch(ticket, result, LOAD_ERROR);
        });
    }

    /// Refresh [`Self::all`]. A failure is logged and keeps the previous list.
    pub async fn fetch_all(self) {
        let Some(ticket) = self.all.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let result = api::fetch_all_categories(&self.api_base.get_value()).await;
        self.all.update(|s| {
            s.finish_fetch(ticket, result);
        });
    }

    pub async fn create(self, payload: CategoryPayload) -> Result<Category, ApiError> {
        let created = api::create_category(&self.api_base.get_value(), &payload).await?;
        log::info!("category {} created", created.id);
        Ok(created)
    }

    pub async fn update(self, id: EntityId, payload: CategoryPayload) -> Result<Category, ApiError> {
        let updated = api::update_category(&self.api_base.get_value(), id, &payload).await?;
        log::info!("category {} updated", id);
        Ok(updated)
    }

    pub async fn delete(self, id: EntityId) -> Result<(), ApiError> {
        api::delete_category(&self.api_base.get_value(), id).await?;
        self.state.update(|s| {
            s.remove(id);
        });
        log::info!("category {} deleted", id);
        Ok(())
    }

    pub fn set_search_term(self, term: String) {
        self.state.update(|s| s.set_search_term(term));
    }

    pub fn clear_error(self) {
        self.state.update(|s| s.clear_error());
    }
}
