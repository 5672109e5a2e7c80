use super::view_model::MovieDetailsViewModel;
use crate::layout::global_context::use_catalog;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::date_utils::{current_year, release_year_bounds};
use contracts::domain::a001_movie::aggregate::Movie;
use leptos::prelude::*;

/// Create/edit form for a movie, with the category picker.
///
/// `movie` selects edit mode. The caller owns the surrounding dialog and
/// decides what happens after `on_saved` / `on_error`.
#[component]
pub fn MovieForm(
    #[prop(optional)]
    movie: Option<Movie>,
    on_saved: Callback<Movie>,
    on_error: Callback<String>,
) -> impl IntoView {
    let catalog = use_catalog();
    let vm = MovieDetailsViewModel::new(movie.as_ref());
    let categories = Memo::new(move |_| catalog.categories.all.with(|all| all.items.clone()));
    let (min_year, max_year) = release_year_bounds(current_year());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(catalog.movies, on_saved, on_error);
    };

    view! {
        <form class="details-form movie-form" on:submit=on_submit>
            {move || vm.error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Input
                id="title"
                label="Título"
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.title.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.title = v))
                disabled=vm.saving
            />

            <Textarea
                id="synopsis"
                label="Sinopsis"
                required=true
                rows=4
                value=Signal::derive(move || vm.form.with(|f| f.synopsis.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.synopsis = v))
                disabled=vm.saving
            />

            <Input
                id="releaseYear"
                label="Año de Lanzamiento"
                input_type="number"
                required=true
                min=min_year
                max=max_year
                value=Signal::derive(move || vm.form.with(|f| f.release_year.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.release_year = v))
                disabled=vm.saving
            />

            <fieldset class="form__picker">
                <legend class="form__picker-title">"Categorías"</legend>
                <p class="form__picker-hint">
                    "Selecciona las categorías que corresponden a esta película"
                </p>
                <div class="form__picker-list">
                    <For
                        each=move || categories.get()
                        key=|category| category.id
                        children=move |category| {
                            let id = category.id;
                            view! {
                                <Checkbox
                                    id=format!("category-{}", id)
                                    label=category.name
                                    hint=category.description
                                    checked=Signal::derive(move || vm.form.with(|f| f.has_category(id)))
                                    on_change=Callback::new(move |checked: bool| vm.toggle_category(id, checked))
                                    disabled=vm.saving
                                />
                            }
                        }
                    />
                </div>
                <Show when=move || categories.with(|c| c.is_empty())>
                    <p class="form__picker-empty">
                        "No hay categorías disponibles. Crea algunas categorías primero."
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
