use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::Category;
use crate::domain::common::{EntityId, Identified, MovieCategoryLink};

// ============================================================================
// Aggregate
// ============================================================================

/// Movie as returned by `GET /movies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub synopsis: String,
    pub release_year: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,

    /// Associated categories; absent when the backend does not include the relation
    #[serde(rename = "Categories", default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    /// Present only when this movie is nested inside a category
    #[serde(rename = "MovieCategory", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<MovieCategoryLink>,
}

impl Movie {
    /// Ids of the associated categories, in server order
    pub fn category_ids(&self) -> Vec<EntityId> {
        self.categories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|c| c.id)
            .collect()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }
}

impl Identified for Movie {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

// ============================================================================
// Write payload
// ============================================================================

/// Body of `POST /movies` and `PUT /movies/:id`.
///
/// Always carries the full desired set of category ids; the backend replaces
/// the association wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub title: String,
    pub synopsis: String,
    pub release_year: i32,
    pub category_ids: Vec<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_uses_backend_field_names() {
        let payload = MoviePayload {
            title: "Alien".to_string(),
            synopsis: "In space no one can hear you scream".to_string(),
            release_year: 1979,
            category_ids: vec![1, 2],
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "title": "Alien",
                "synopsis": "In space no one can hear you scream",
                "releaseYear": 1979,
                "categoryIds": [1, 2]
            })
        );
    }

    #[test]
    fn decodes_movie_with_nested_categories() {
        let raw = json!({
            "id": 7,
            "title": "Heat",
            "synopsis": "Cops and robbers",
            "releaseYear": 1995,
            "createdAt": "2024-03-15T14:02:26.123Z",
            "updatedAt": "2024-03-16T08:00:00.000Z",
            "Categories": [
                {
                    "id": 1,
                    "name": "Acción",
                    "description": "Tiros",
                    "createdAt": "2024-01-01T00:00:00.000Z",
                    "updatedAt": "2024-01-01T00:00:00.000Z",
                    "MovieCategory": { "movieId": 7, "categoryId": 1 }
                },
                {
                    "id": 4,
                    "name": "Drama",
                    "description": "",
                    "createdAt": "2024-01-01T00:00:00.000Z",
                    "updatedAt": "2024-01-01T00:00:00.000Z",
                    "MovieCategory": { "movieId": 7, "categoryId": 4 }
                }
            ]
        });

        let movie: Movie = serde_json::from_value(raw).unwrap();
        assert_eq!(movie.release_year, 1995);
        assert_eq!(movie.category_ids(), vec![1, 4]);
        assert_eq!(movie.category_names(), vec!["Acción", "Drama"]);
        assert_eq!(
            movie.categories.as_ref().unwrap()[0].link,
            Some(MovieCategoryLink { movie_id: 7, category_id: 1 })
        );
    }

    #[test]
    fn relation_is_optional() {
        let movie: Movie = serde_json::from_value(json!({
            "id": 3,
            "title": "Solaris",
            "releaseYear": 1972
        }))
        .unwrap();

        assert!(movie.categories.is_none());
        assert!(movie.category_ids().is_empty());
        assert_eq!(movie.synopsis, "");
    }
}
