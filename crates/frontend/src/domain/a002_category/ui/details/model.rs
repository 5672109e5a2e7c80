use contracts::domain::a002_category::aggregate::{Category, CategoryPayload};
use contracts::domain::common::EntityId;

use crate::shared::form_validation::{require, FormError};

/// Length of the synopsis excerpt shown next to each movie in the picker
pub const SYNOPSIS_EXCERPT_CHARS: usize = 60;

/// Editable copy of a category held by the form until submit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub movie_ids: Vec<EntityId>,
}

impl CategoryDraft {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            movie_ids: category.movie_ids(),
        }
    }

    pub fn has_movie(&self, id: EntityId) -> bool {
        self.movie_ids.contains(&id)
    }

    pub fn set_movie(&mut self, id: EntityId, checked: bool) {
        if checked {
            if !self.has_movie(id) {
                self.movie_ids.push(id);
            }
        } else {
            self.movie_ids.retain(|m| *m != id);
        }
    }

    pub fn to_payload(&self) -> Result<CategoryPayload, FormError> {
        Ok(CategoryPayload {
            name: require("Nombre", &self.name)?,
            description: require("Descripción", &self.description)?,
            movie_ids: self.movie_ids.clone(),
        })
    }
}

/// First `max_chars` characters of `text` followed by an ellipsis
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_movie::aggregate::Movie;

    fn movie(id: EntityId) -> Movie {
        Movie {
            id,
            title: format!("Película {}", id),
            synopsis: String::new(),
            release_year: 2000,
            created_at: String::new(),
            updated_at: String::new(),
            categories: None,
            link: None,
        }
    }

    #[test]
    fn test_default_is_blank() {
        let draft = CategoryDraft::default();
        assert!(draft.name.is_empty() && draft.description.is_empty());
        assert!(draft.movie_ids.is_empty());
    }

    #[test]
    fn test_from_category_takes_nested_movie_ids() {
        let category = Category {
            id: 3,
            name: "Acción".to_string(),
            description: "Explosiones".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            movies: Some(vec![movie(10), movie(12)]),
            link: None,
        };
        let draft = CategoryDraft::from_category(&category);
        assert_eq!(draft.name, "Acción");
        assert_eq!(draft.movie_ids, vec![10, 12]);
    }

    #[test]
    fn test_set_movie_never_duplicates() {
        let mut draft = CategoryDraft::default();
        draft.set_movie(10, true);
        draft.set_movie(10, true);
        assert_eq!(draft.movie_ids, vec![10]);
        draft.set_movie(10, false);
        assert!(draft.movie_ids.is_empty());
    }

    #[test]
    fn test_to_payload_requires_name_then_description() {
        let draft = CategoryDraft::default();
        assert_eq!(draft.to_payload(), Err(FormError::Required("Nombre")));

        let draft = CategoryDraft {
            name: "Drama".to_string(),
            description: "  ".to_string(),
            movie_ids: vec![],
        };
        assert_eq!(draft.to_payload(), Err(FormError::Required("Descripción")));
    }

    #[test]
    fn test_to_payload_ok() {
        let draft = CategoryDraft {
            name: " Drama ".to_string(),
            description: "Historias serias".to_string(),
            movie_ids: vec![4, 1],
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.name, "Drama");
        assert_eq!(payload.movie_ids, vec![4, 1]);
    }

    #[test]
    fn test_excerpt_counts_chars() {
        assert_eq!(excerpt("Año", 2), "Añ...");
        assert_eq!(excerpt("corto", 60), "corto...");
        assert_eq!(excerpt("", 60), "...");
    }
}
