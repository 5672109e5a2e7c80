use contracts::domain::a001_movie::aggregate::{Movie, MoviePayload};
use contracts::domain::common::EntityId;

use crate::shared::date_utils::release_year_bounds;
use crate::shared::form_validation::{integer_in_range, require, FormError};

/// Editable copy of a movie held by the form until submit.
///
/// The release year stays a string so that whatever the user typed can be
/// reported back instead of silently coerced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDraft {
    pub title: String,
    pub synopsis: String,
    pub release_year: String,
    pub category_ids: Vec<EntityId>,
}

impl MovieDraft {
    /// Blank draft for create mode
    pub fn new(current_year: i32) -> Self {
        Self {
            release_year: current_year.to_string(),
            ..Self::default()
        }
    }

    /// Pre-populated draft for edit mode
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            synopsis: movie.synopsis.clone(),
            release_year: movie.release_year.to_string(),
            category_ids: movie.category_ids(),
        }
    }

    pub fn has_category(&self, id: EntityId) -> bool {
        self.category_ids.contains(&id)
    }

    pub fn set_category(&mut self, id: EntityId, checked: bool) {
        if checked {
            if !self.has_category(id) {
                self.category_ids.push(id);
            }
        } else {
            self.category_ids.retain(|c| *c != id);
        }
    }

    /// Validate and build the request body. The first failing field wins.
    pub fn to_payload(&self, current_year: i32) -> Result<MoviePayload, FormError> {
        let title = require("Título", &self.title)?;
        let synopsis = require("Sinopsis", &self.synopsis)?;
        let (min, max) = release_year_bounds(current_year);
        let release_year = integer_in_range("Año de Lanzamiento", &self.release_year, min, max)?;

        Ok(MoviePayload {
            title,
            synopsis,
            release_year,
            category_ids: self.category_ids.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::aggregate::Category;

    fn category(id: EntityId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            movies: None,
            link: None,
        }
    }

    fn filled() -> MovieDraft {
        MovieDraft {
            title: "Alien".to_string(),
            synopsis: "En el espacio nadie puede oír tus gritos".to_string(),
            release_year: "1979".to_string(),
            category_ids: vec![2],
        }
    }

    #[test]
    fn test_new_defaults_to_current_year() {
        let draft = MovieDraft::new(2026);
        assert_eq!(draft.release_year, "2026");
        assert!(draft.title.is_empty());
        assert!(draft.category_ids.is_empty());
    }

    #[test]
    fn test_from_movie_takes_nested_category_ids() {
        let movie = Movie {
            id: 7,
            title: "Heat".to_string(),
            synopsis: "Ladrones y policías".to_string(),
            release_year: 1995,
            created_at: String::new(),
            updated_at: String::new(),
            categories: Some(vec![category(1, "Acción"), category(4, "Drama")]),
            link: None,
        };
        let draft = MovieDraft::from_movie(&movie);
        assert_eq!(draft.title, "Heat");
        assert_eq!(draft.release_year, "1995");
        assert_eq!(draft.category_ids, vec![1, 4]);
    }

    #[test]
    fn test_from_movie_without_relation() {
        let movie = Movie {
            id: 7,
            title: "Heat".to_string(),
            synopsis: String::new(),
            release_year: 1995,
            created_at: String::new(),
            updated_at: String::new(),
            categories: None,
            link: None,
        };
        assert!(MovieDraft::from_movie(&movie).category_ids.is_empty());
    }

    #[test]
    fn test_set_category_never_duplicates() {
        let mut draft = MovieDraft::new(2026);
        draft.set_category(3, true);
        draft.set_category(3, true);
        draft.set_category(5, true);
        assert_eq!(draft.category_ids, vec![3, 5]);

        draft.set_category(3, false);
        draft.set_category(9, false);
        assert_eq!(draft.category_ids, vec![5]);
        assert!(!draft.has_category(3));
    }

    #[test]
    fn test_to_payload_trims_and_parses() {
        let mut draft = filled();
        draft.title = "  Alien ".to_string();
        let payload = draft.to_payload(2026).unwrap();
        assert_eq!(payload.title, "Alien");
        assert_eq!(payload.release_year, 1979);
        assert_eq!(payload.category_ids, vec![2]);
    }

    #[test]
    fn test_to_payload_required_fields_in_order() {
        let mut draft = filled();
        draft.title = " ".to_string();
        draft.synopsis.clear();
        assert_eq!(draft.to_payload(2026), Err(FormError::Required("Título")));

        let mut draft = filled();
        draft.synopsis = "\n".to_string();
        assert_eq!(draft.to_payload(2026), Err(FormError::Required("Sinopsis")));
    }

    #[test]
    fn test_to_payload_year_bounds() {
        let mut draft = filled();
        draft.release_year = "2031".to_string();
        assert_eq!(draft.to_payload(2026).map(|p| p.release_year), Ok(2031));

        draft.release_year = "2032".to_string();
        assert_eq!(
            draft.to_payload(2026),
            Err(FormError::OutOfRange {
                field: "Año de Lanzamiento",
                min: 1900,
                max: 2031
            })
        );

        draft.release_year = "1899".to_string();
        assert!(draft.to_payload(2026).is_err());

        draft.release_year = "abc".to_string();
        assert_eq!(draft.to_payload(2026), Err(FormError::NotANumber("Año de Lanzamiento")));
    }
}
