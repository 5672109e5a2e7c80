mod state;

use contracts::domain::a001_movie::aggregate::Movie;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::MovieForm;
use crate::layout::global_context::use_catalog;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;
use state::create_state;

#[component]
pub fn MoviesPage() -> impl IntoView {
    let catalog = use_catalog();
    let store = catalog.movies;
    let notifications = catalog.notifications;
    let page_state = create_state();

    let page = Memo::new(move |_| page_state.with(|s| s.page));
    let search_term = Memo::new(move |_| store.state.with(|s| s.search_term.clone()));

    // (re)load whenever the page or the applied search term changes
    Effect::new(move |_| {
        let page = page.get();
        let term = search_term.get();
        spawn_local(store.fetch_list(page, term));
        spawn_local(catalog.categories.fetch_all());
    });

    let reload = move || {
        spawn_local(store.fetch_list(page.get_untracked(), search_term.get_untracked()));
    };

    let on_search = Callback::new(move |term: String| {
        store.set_search_term(term);
        page_state.update(|s| s.on_search());
    });

    let on_page_change = Callback::new(move |p: u32| page_state.update(|s| s.page = p));

    let creating = Memo::new(move |_| page_state.with(|s| s.creating));
    let editing = Memo::new(move |_| page_state.with(|s| s.editing.clone()));
    let pending_delete = Memo::new(move |_| page_state.with(|s| s.pending_delete.clone()));
    let close_dialogs = Callback::new(move |_: ()| page_state.update(|s| s.close_dialogs()));

    let on_created = Callback::new(move |_: Movie| {
        page_state.update(|s| s.close_dialogs());
        reload();
        notifications.success("Película creada", "La película se creó correctamente");
    });
    let on_updated = Callback::new(move |_: Movie| {
        page_state.update(|s| s.close_dialogs());
        reload();
        notifications.success("Película actualizada", "La película se actualizó correctamente");
    });
    let on_save_error = Callback::new(move |message: String| notifications.error("Error", &message));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(movie) = page_state.with_untracked(|s| s.pending_delete.clone()) else {
            return;
        };
        page_state.update(|s| s.close_dialogs());
        spawn_local(async move {
            match store.delete(movie.id).await {
                Ok(()) => notifications.success("Película eliminada", "La película se eliminó correctamente"),
                Err(e) => {
                    log::error!("Error al eliminar película {}: {}", movie.id, e);
                    notifications.error("Error", "No se pudo eliminar la película");
                }
            }
        });
    });

    let is_initial_loading = Memo::new(move |_| store.state.with(|s| s.is_initial_loading()));
    let is_empty = Memo::new(move |_| store.state.with(|s| s.is_empty()));
    let searching = Signal::derive(move || !search_term.get().is_empty());
    let last_page = Signal::derive(move || store.state.with(|s| s.meta.last_page));
    let total = Signal::derive(move || store.state.with(|s| s.meta.total));

    view! {
        <div class="page movies-page">
            <PageHeader title="Películas" subtitle="Gestiona tu catálogo de películas">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| page_state.update(|s| s.open_create())
                >
                    {icon("plus")}
                    " Nueva Película"
                </Button>
            </PageHeader>

            <SearchInput
                value=search_term
                on_change=on_search
                placeholder="Buscar películas por título..."
                debounce_ms=catalog.search_debounce_ms
            />

            {move || store.state.with(|s| s.error.clone()).map(|e| view! {
                <div class="alert alert--error">
                    {icon("alert")}
                    <span>{e}</span>
                    <button
                        class="alert__close"
                        title="Cerrar"
                        on:click=move |_| store.clear_error()
                    >
                        {icon("x")}
                    </button>
                </div>
            })}

            <Show
                when=move || !is_initial_loading.get()
                fallback=|| view! { <div class="page__loading">"Cargando películas..."</div> }
            >
                <div class="card-grid">
                    <For
                        each=move || store.state.with(|s| s.items.clone())
                        key=|movie| (movie.id, movie.updated_at.clone())
                        children=move |movie| view! {
                            <MovieCard
                                movie=movie
                                on_edit=Callback::new(move |m: Movie| page_state.update(|s| s.open_edit(m)))
                                on_delete=Callback::new(move |m: Movie| page_state.update(|s| s.ask_delete(m)))
                            />
                        }
                    />
                </div>

                <Show when=move || is_empty.get()>
                    <EmptyState
                        icon_name="film"
                        title="No hay películas"
                        hint="Comienza creando tu primera película"
                        search_hint="No se encontraron películas con ese título"
                        searching=searching
                        create_label="Crear Primera Película"
                        on_create=Callback::new(move |_: ()| page_state.update(|s| s.open_create()))
                    />
                </Show>
            </Show>

            <Show when=move || store.state.with(|s| s.meta.has_more_pages())>
                <PaginationControls
                    current_page=page
                    last_page=last_page
                    total_count=total
                    on_page_change=on_page_change
                />
            </Show>

            <Show when=move || creating.get()>
                <Modal
                    title="Crear Nueva Película"
                    description="Completa los datos para crear una nueva película"
                    on_close=close_dialogs
                    class="modal--wide"
                >
                    <MovieForm on_saved=on_created on_error=on_save_error />
                </Modal>
            </Show>

            {move || editing.get().map(|movie| view! {
                <Modal
                    title="Editar Película"
                    description="Modifica los datos de la película"
                    on_close=close_dialogs
                    class="modal--wide"
                >
                    <MovieForm movie=movie on_saved=on_updated on_error=on_save_error />
                </Modal>
            })}

            {move || pending_delete.get().map(|movie| view! {
                <ConfirmDialog
                    title="¿Eliminar película?"
                    message=format!(
                        "Esta acción no se puede deshacer. La película \"{}\" será eliminada permanentemente.",
                        movie.title
                    )
                    on_confirm=confirm_delete
                    on_cancel=close_dialogs
                />
            })}
        </div>
    }
}

#[component]
fn MovieCard(movie: Movie, on_edit: Callback<Movie>, on_delete: Callback<Movie>) -> impl IntoView {
    let category_names = movie.category_names();
    let updated = (!movie.updated_at.is_empty()).then(|| format_date(&movie.updated_at));
    let for_edit = movie.clone();
    let for_delete = movie.clone();

    view! {
        <div class="card movie-card">
            <div class="card__header">
                <div class="card__heading">
                    <h3 class="card__title">{movie.title}</h3>
                    <div class="card__meta">
                        {icon("calendar")}
                        <span>{movie.release_year}</span>
                    </div>
                </div>
                <div class="card__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_edit.run(for_edit.clone())
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        class="button--danger"
                        on_click=move |_| on_delete.run(for_delete.clone())
                    >
                        {icon("delete")}
                    </Button>
                </div>
            </div>
            <div class="card__body">
                <div class="card__description">
                    {icon("file-text")}
                    <p>{movie.synopsis}</p>
                </div>
                {(!category_names.is_empty()).then(|| view! {
                    <div class="card__relations">
                        <p class="card__relations-title">"Categorías:"</p>
                        <div class="card__badges">
                            {category_names
                                .into_iter()
                                .map(|name| view! { <Badge>{name}</Badge> })
                                .collect_view()}
                        </div>
                    </div>
                })}
            </div>
            {updated.map(|date| view! {
                <div class="card__footer">{format!("Actualizado: {}", date)}</div>
            })}
        </div>
    }
}
