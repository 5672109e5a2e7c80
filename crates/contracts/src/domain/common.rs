use serde::{Deserialize, Serialize};

/// Server-assigned identifier. The client never mints one.
pub type EntityId = i64;

/// Anything that carries a server identity (list items, picker items).
pub trait Identified {
    fn entity_id(&self) -> EntityId;
}

/// Join row of the movie/category many-to-many relation.
///
/// The backend attaches it to nested relation items; it carries nothing
/// beyond the two foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCategoryLink {
    pub movie_id: EntityId,
    pub category_id: EntityId,
}
