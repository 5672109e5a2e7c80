use contracts::domain::a001_movie::aggregate::Movie;
use leptos::prelude::*;

/// UI state owned by the movies page; list data lives in the store
#[derive(Clone, Debug, PartialEq)]
pub struct MoviesPageState {
    /// 1-based
    pub page: u32,
    pub creating: bool,
    pub editing: Option<Movie>,
    pub pending_delete: Option<Movie>,
}

impl Default for MoviesPageState {
    fn default() -> Self {
        Self {
            page: 1,
            creating: false,
            editing: None,
            pending_delete: None,
        }
    }
}

impl MoviesPageState {
    /// A new search always starts from the first page
    pub fn on_search(&mut self) {
        self.page = 1;
    }

    /// Dialogs are exclusive; opening one closes the others
    pub fn open_create(&mut self) {
        self.editing = None;
        self.pending_delete = None;
        self.creating = true;
    }

    pub fn open_edit(&mut self, movie: Movie) {
        self.creating = false;
        self.pending_delete = None;
        self.editing = Some(movie);
    }

    pub fn ask_delete(&mut self, movie: Movie) {
        self.creating = false;
        self.editing = None;
        self.pending_delete = Some(movie);
    }

    pub fn close_dialogs(&mut self) {
        self.creating = false;
        self.editing = None;
        self.pending_delete = None;
    }
}

pub fn create_state() -> RwSignal<MoviesPageState> {
    RwSignal::new(MoviesPageState::default())
}
