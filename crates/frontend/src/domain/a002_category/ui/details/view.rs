use super::model::{excerpt, SYNOPSIS_EXCERPT_CHARS};
use super::view_model::CategoryDetailsViewModel;
use crate::layout::global_context::use_catalog;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

/// Create/edit form for a category, with the movie picker.
///
/// The picker lists whatever page of movies the movie store currently holds.
#[component]
pub fn CategoryForm(
    #[prop(optional)]
    category: Option<Category>,
    on_saved: Callback<Category>,
    on_error: Callback<String>,
) -> impl IntoView {
    let catalog = use_catalog();
    let vm = CategoryDetailsViewModel::new(category.as_ref());
    let movies = Memo::new(move |_| catalog.movies.state.with(|s| s.items.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(catalog.categories, on_saved, on_error);
    };

    view! {
        <form class="details-form category-form" on:submit=on_submit>
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                id="name"
                label="Nombre"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                disabled=vm.saving
            />

            <Textarea
                id="description"
                label="Descripción"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.description.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.description = v))
                disabled=vm.saving
            />

            <fieldset class="form__picker">
                <legend class="form__picker-title">"Películas"</legend>
                <p class="form__picker-hint">
                    "Selecciona las películas que pertenecen a esta categoría"
                </p>
                <div class="form__picker-list">
                    <For
                        each=move || movies.get()
                        key=|movie| movie.id
                        children=move |movie| {
                            let id = movie.id;
                            let hint = format!(
                                "{} • {}",
                                movie.release_year,
                                excerpt(&movie.synopsis, SYNOPSIS_EXCERPT_CHARS)
                            );
                            view! {
                                <Checkbox
                                    id=format!("movie-{}", id)
                                    label=movie.title
                                    hint=hint
                                    checked=Signal::derive(move || vm.form.with(|f| f.has_movie(id)))
                                    on_change=Callback::new(move |checked: bool| vm.toggle_movie(id, checked))
                                    disabled=vm.saving
                                />
                            }
                        }
                    />
                </div>
                <Show when=move || movies.with(|m| m.is_empty())>
                    <p class="form__picker-empty">
                        "No hay películas disponibles. Crea algunas películas primero."
                    </p>
                </Show>
            </fieldset>

            <div class="details-actions">
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                >
                    {move || {
                        if vm.saving.get() {
                            "Guardando..."
                        } else if vm.is_edit_mode() {
                            "Actualizar"
                        } else {
                            "Crear"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
