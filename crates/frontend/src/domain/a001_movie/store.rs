//! Movie store
//!
//! Mirrors the current page of `/movies` for the movies page. Every operation
//! is one HTTP call; create/update leave the held page alone and the caller
//! re-fetches, delete removes the item locally once the server confirms.

use contracts::domain::a001_movie::aggregate::{Movie, MoviePayload};
use contracts::domain::common::EntityId;
use leptos::prelude::*;

use super::api;
use crate::shared::api_utils::ApiError;
use crate::shared::list_state::ListState;

pub const LOAD_ERROR: &str = "Error al cargar películas";

#[derive(Clone, Copy)]
pub struct MoviesStore {
    pub state: RwSignal<ListState<Movie>>,
    api_base: StoredValue<String>,
}

impl MoviesStore {
    pub fn new(api_base: String) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            api_base: StoredValue::new(api_base),
        }
    }

    /// Load `page` filtered by `title`. Responses to superseded requests are
    /// dropped.
    pub async fn fetch_list(self, page: u32, title: String) {
        let Some(ticket) = self.state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let result = api::fetch_movies(&self.api_base.get_value(), page, &title).await;
        self.state.update(|s| {
            s.finish_fetch(ticket, result, LOAD_ERROR);
        });
    }

    pub async fn create(self, payload: MoviePayload) -> Result<Movie, ApiError> {
        let created = api::create_movie(&self.api_base.get_value(), &payload).await?;
        log::info!("movie {} created", created.id);
        Ok(created)
    }

    pub async fn update(self, id: EntityId, payload: MoviePayload) -> Result<Movie, ApiError> {
        let updated = api::update_movie(&self.api_base.get_value(), id, &payload).await?;
        log::info!("movie {} updated", id);
        Ok(updated)
    }

    /// Delete on the server, then drop the item from the held page.
    /// On failure the page is left untouched.
    pub async fn delete(self, id: EntityId) -> Result<(), ApiError> {
        api::delete_movie(&self.api_base.get_value(), id).await?;
        self.state.update(|s| {
            s.remove(id);
        });
        log::info!("movie {} deleted", id);
        Ok(())
    }

    pub fn set_search_term(self, term: String) {
        self.state.update(|s| s.set_search_term(term));
    }

    pub fn clear_error(self) {
        self.state.update(|s| s.clear_error());
    }
}
