use serde::{Deserialize, Serialize};

use crate::domain::a001_movie::aggregate::Movie;
use crate::domain::common::{EntityId, Identified, MovieCategoryLink};

/// Category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,

    #[serde(rename = "Movies", default, skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<Movie>>,

    /// Present only when this category is nested inside a movie
    #[serde(rename = "MovieCategory", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<MovieCategoryLink>,
}

impl Category {
    pub fn movie_ids(&self) -> Vec<EntityId> {
        self.movies
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|m| m.id)
            .collect()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.as_ref().map_or(0, Vec::len)
    }
}

impl Identified for Category {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

/// Body of `POST /categories` and `PUT /categories/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
    pub movie_ids: Vec<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_uses_backend_field_names() {
        let payload = CategoryPayload {
            name: "Terror".to_string(),
            description: "Miedo".to_string(),
            movie_ids: vec![3],
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Terror", "description": "Miedo", "movieIds": [3] })
        );
    }

    #[test]
    fn decodes_category_with_movies() {
        let category: Category = serde_json::from_value(json!({
            "id": 2,
            "name": "Comedia",
            "description": "Risas",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-02T00:00:00.000Z",
            "Movies": [
                { "id": 10, "title": "Airplane!", "synopsis": "", "releaseYear": 1980,
                  "MovieCategory": { "movieId": 10, "categoryId": 2 } }
            ]
        }))
        .unwrap();

        assert_eq!(category.movie_ids(), vec![10]);
        assert_eq!(category.movie_count(), 1);
    }

    #[test]
    fn missing_relation_counts_as_empty() {
        let category: Category =
            serde_json::from_value(json!({ "id": 5, "name": "Western" })).unwrap();
        assert_eq!(category.movie_count(), 0);
        assert!(category.movie_ids().is_empty());
    }
}
