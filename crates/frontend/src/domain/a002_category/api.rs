use contracts::domain::a002_category::aggregate::{Category, CategoryPayload};
use contracts::domain::common::EntityId;
use contracts::shared::pagination::ListResponse;

use crate::shared::api_utils::{self, item_url, list_url, resource_url, ApiError};

const RESOURCE: &str = "categories";
const SEARCH_PARAM: &str = "name";

/// Fetch one page of categories, filtered by name
pub async fn fetch_categories(
    base: &str,
    page: u32,
    name: &str,
) -> Result<ListResponse<Category>, ApiError> {
    api_utils::get_json(&list_url(base, RESOURCE, SEARCH_PARAM, page, name)).await
}

/// Fetch every category (no filter, no page) for the movie form picker
pub async fn fetch_all_categories(base: &str) -> Result<Vec<Category>, ApiError> {
    let response: ListResponse<Category> = api_utils::get_json(&resource_url(base, RESOURCE)).await?;
    Ok(response.data)
}

pub async fn create_category(base: &str, payload: &CategoryPayload) -> Result<Category, ApiError> {
    api_utils::post_json(&resource_url(base, RESOURCE), payload).await
}

pub async fn update_category(
    base: &str,
    id: EntityId,
    payload: &CategoryPayload,
) -> Result<Category, ApiError> {
    api_utils::put_json(&item_url(base, RESOURCE, id), payload).await
}

pub async fn delete_category(base: &str, id: EntityId) -> Result<(), ApiError> {
    api_utils::delete(&item_url(base, RESOURCE, id)).await
}
