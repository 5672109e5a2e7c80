use super::model::MovieDraft;
use crate::domain::a001_movie::store::MoviesStore;
use crate::shared::date_utils::current_year;
use contracts::domain::a001_movie::aggregate::Movie;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// ViewModel for the movie create/edit form
#[derive(Clone, Copy)]
pub struct MovieDetailsViewModel {
    pub form: RwSignal<MovieDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// `Some` in edit mode
    editing: Option<EntityId>,
}

impl MovieDetailsViewModel {
    pub fn new(movie: Option<&Movie>) -> Self {
        let draft = match movie {
            Some(m) => MovieDraft::from_movie(m),
            None => MovieDraft::new(current_year()),
        };
        Self {
            form: RwSignal::new(draft),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            editing: movie.map(|m| m.id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle_category(&self, id: EntityId, checked: bool) {
        self.form.update(|f| f.set_category(id, checked));
    }

    /// Validate, then create or update. Nothing is sent while the draft is
    /// invalid; the first problem is shown inline instead.
    pub fn save_command(&self, store: MoviesStore, on_saved: Callback<Movie>, on_error: Callback<String>) {
        if self.saving.get_untracked() {
            return;
        }
        let payload = match self.form.with_untracked(|f| f.to_payload(current_year())) {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };
        self.error.set(None);
        self.saving.set(true);

        let editing = self.editing;
        let saving = self.saving;
        wasm_bindgen_futures::spawn_local(async move {
            let (result, failure) = match editing {
                Some(id) => (store.update(id, payload).await, "Error al actualizar película"),
                None => (store.create(payload).await, "Error al crear película"),
            };
            saving.set(false);
            match result {
                Ok(movie) => on_saved.run(movie),
                Err(e) => {
                    log::error!("{}: {}", failure, e);
                    on_error.run(failure.to_string());
                }
            }
        });
    }
}
