use contracts::domain::a001_movie::aggregate::{Movie, MoviePayload};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::ListResponse;

use crate::shared::api_utils::{self, item_url, list_url, resource_url, ApiError};

const RESOURCE: &str = "movies";
const SEARCH_PARAM: &str = "title";

/// Fetch one page of movies, filtered by title
pub async fn fetch_movies(
    base: &str,
    page: u32,
    title: &str,
) -> Result<ListResponse<Movie>, ApiError> {
    api_utils::get_json(&list_url(base, RESOURCE, SEARCH_PARAM, page, title)).await
}

/// Create new movie
pub async fn create_movie(base: &str, payload: &MoviePayload) -> Result<Movie, ApiError> {
    api_utils::post_json(&resource_url(base, RESOURCE), payload).await
}

/// Replace an existing movie, including its full set of categories
pub async fn update_movie(
    base: &str,
    id: EntityId,
    payload: &MoviePayload,
) -> Result<Movie, ApiError> {
    api_utils::put_json(&item_url(base, RESOURCE, id), payload).await
}

/// Delete movie
pub async fn delete_movie(base: &str, id: EntityId) -> Result<(), ApiError> {
    api_utils::delete(&item_url(base, RESOURCE, id)).await
}
