use super::model::CategoryDraft;
use crate::domain::a002_category::store::CategoriesStore;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// ViewModel for the category create/edit form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    editing: Option<EntityId>,
}

impl CategoryDetailsViewModel {
    pub fn new(category: Option<&Category>) -> Self {
        Self {
            form: RwSignal::new(category.map(CategoryDraft::from_category).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            editing: category.map(|c| c.id),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn toggle_movie(&self, id: EntityId, checked: bool) {
        self.form.update(|f| f.set_movie(id, checked));
    }

    pub fn save_command(
        &self,
        store: CategoriesStore,
        on_saved: Callback<Category>,
        on_error: Callback<String>,
    ) {
        if self.saving.get_untracked() {
            return;
        }
        let payload = match self.form.with_untracked(|f| f.to_payload()) {
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
                Some(id) => (store.update(id, payload).await, "Error al actualizar categoría"),
                None => (store.create(payload).await, "Error al crear categoría"),
            };
            saving.set(false);
            match result {
                Ok(category) => on_saved.run(category),
                Err(e) => {
                    log::error!("{}: {}", failure, e);
                    on_error.run(failure.to_string());
                }
            }
        });
    }
}
