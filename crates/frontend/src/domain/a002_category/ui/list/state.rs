use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

/// Movie titles shown as badges on a category card
pub const MOVIE_PREVIEW_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoriesPageState {
    /// 1-based
    pub page: u32,
    pub creating: bool,
    pub editing: Option<Category>,
    pub pending_delete: Option<Category>,
}

impl Default for CategoriesPageState {
    fn default() -> Self {
        Self {
            page: 1,
            creating: false,
            editing: None,
            pending_delete: None,
        }
    }
}

impl CategoriesPageState {
    pub fn on_search(&mut self) {
        self.page = 1;
    }

    pub fn open_create(&mut self) {
        self.editing = None;
        self.pending_delete = None;
        self.creating = true;
    }

    pub fn open_edit(&mut self, category: Category) {
        self.creating = false;
        self.pending_delete = None;
        self.editing = Some(category);
    }

    pub fn ask_delete(&mut self, category: Category) {
        self.creating = false;
        self.editing = None;
        self.pending_delete = Some(category);
    }

    pub fn close_dialogs(&mut self) {
        self.creating = false;
        self.editing = None;
        self.pending_delete = None;
    }
}

pub fn create_state() -> RwSignal<CategoriesPageState> {
    RwSignal::new(CategoriesPageState::default())
}

/// First `limit` movie titles of `category` and how many were left out
pub fn movie_preview(category: &Category, limit: usize) -> (Vec<String>, usize) {
    let movies = category.movies.as_deref().unwrap_or_default();
    let shown = movies.iter().take(limit).map(|m| m.title.clone()).collect();
    (shown, movies.len().saturating_sub(limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_movie::aggregate::Movie;

    fn category(movie_count: i64) -> Category {
        let movies = (1..=movie_count)
            .map(|id| Movie {
                id,
                title: format!("M{}", id),
                synopsis: String::new(),
                release_year: 2000,
                created_at: String::new(),
                updated_at: String::new(),
                categories: None,
                link: None,
            })
            .collect();
        Category {
            id: 1,
            name: "Acción".to_string(),
            description: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            movies: Some(movies),
            link: None,
        }
    }

    #[test]
    fn test_preview_with_overflow() {
        let (shown, rest) = movie_preview(&category(5), MOVIE_PREVIEW_LIMIT);
        assert_eq!(shown, vec!["M1", "M2", "M3"]);
        assert_eq!(rest, 2);
    }

    #[test]
    fn test_preview_without_overflow() {
        let (shown, rest) = movie_preview(&category(2), MOVIE_PREVIEW_LIMIT);
        assert_eq!(shown.len(), 2);
        assert_eq!(rest, 0);

        let mut bare = category(0);
        bare.movies = None;
        assert_eq!(movie_preview(&bare, MOVIE_PREVIEW_LIMIT), (vec![], 0));
    }

    #[test]
    fn test_search_resets_page_and_dialogs_are_exclusive() {
        let mut state = CategoriesPageState {
            page: 3,
            ..Default::default()
        };
        state.on_search();
        assert_eq!(state.page, 1);

        state.open_edit(category(0));
        state.open_create();
        assert!(state.creating && state.editing.is_none());
    }
}
