mod state;

use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::CategoryForm;
use crate::layout::global_context::use_catalog;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;
use state::{create_state, movie_preview, MOVIE_PREVIEW_LIMIT};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let catalog = use_catalog();
    let store = catalog.categories;
    let notifications = catalog.notifications;
    let page_state = create_state();

    let page = Memo::new(move |_| page_state.with(|s| s.page));
    let search_term = Memo::new(move |_| store.state.with(|s| s.search_term.clone()));

    Effect::new(move |_| {
        let page = page.get();
        let term = search_term.get();
        spawn_local(store.fetch_list(page, term));
        // picker: first page of movies, unfiltered
        spawn_local(catalog.movies.fetch_list(1, String::new()));
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

    let on_created = Callback::new(move |_: Category| {
        page_state.update(|s| s.close_dialogs());
        reload();
        notifications.success("Categoría creada", "La categoría se creó correctamente");
    });
    let on_updated = Callback::new(move |_: Category| {
        page_state.update(|s| s.close_dialogs());
        reload();
        notifications.success("Categoría actualizada", "La categoría se actualizó correctamente");
    });
    let on_save_error = Callback::new(move |message: String| notifications.error("Error", &message));

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(category) = page_state.with_untracked(|s| s.pending_delete.clone()) else {
            return;
        };
        page_state.update(|s| s.close_dialogs());
        spawn_local(async move {
            match store.delete(category.id).await {
                Ok(()) => notifications.success("Categoría eliminada", "La categoría se eliminó correctamente"),
                Err(e) => {
                    log::error!("Error al eliminar categoría {}: {}", category.id, e);
                    notifications.error("Error", "No se pudo eliminar la categoría");
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
        <div class="page categories-page">
            <PageHeader title="Categorías" subtitle="Organiza tus películas por categorías">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| page_state.update(|s| s.open_create())
                >
                    {icon("plus")}
                    " Nueva Categoría"
                </Button>
            </PageHeader>

            <SearchInput
                value=search_term
                on_change=on_search
                placeholder="Buscar categorías por nombre..."
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
                fallback=|| view! { <div class="page__loading">"Cargando categorías..."</div> }
            >
                <div class="card-grid">
                    <For
                        each=move || store.state.with(|s| s.items.clone())
                        key=|category| (category.id, category.updated_at.clone())
                        children=move |category| view! {
                            <CategoryCard
                                category=category
                                on_edit=Callback::new(move |c: Category| page_state.update(|s| s.open_edit(c)))
                                on_delete=Callback::new(move |c: Category| page_state.update(|s| s.ask_delete(c)))
                            />
                        }
                    />
                </div>

                <Show when=move || is_empty.get()>
                    <EmptyState
                        icon_name="folder-open"
                        title="No hay categorías"
                        hint="Comienza creando tu primera categoría"
                        search_hint="No se encontraron categorías con ese nombre"
                        searching=searching
                        create_label="Crear Primera Categoría"
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
                    title="Crear Nueva Categoría"
                    description="Completa los datos para crear una nueva categoría"
                    on_close=close_dialogs
                    class="modal--wide"
                >
                    <CategoryForm on_saved=on_created on_error=on_save_error />
                </Modal>
            </Show>

            {move || editing.get().map(|category| view! {
                <Modal
                    title="Editar Categoría"
                    description="Modifica los datos de la categoría"
                    on_close=close_dialogs
                    class="modal--wide"
                >
                    <CategoryForm category=category on_saved=on_updated on_error=on_save_error />
                </Modal>
            })}

            {move || pending_delete.get().map(|category| view! {
                <ConfirmDialog
                    title="¿Eliminar categoría?"
                    message=format!(
                        "Esta acción no se puede deshacer. La categoría \"{}\" será eliminada permanentemente.",
                        category.name
                    )
                    on_confirm=confirm_delete
                    on_cancel=close_dialogs
                />
            })}
        </div>
    }
}

#[component]
fn CategoryCard(
    category: Category,
    on_edit: Callback<Category>,
    on_delete: Callback<Category>,
) -> impl IntoView {
    let movie_count = category.movie_count();
    let (preview, hidden) = movie_preview(&category, MOVIE_PREVIEW_LIMIT);
    let for_edit = category.clone();
    let for_delete = category.clone();

    let relations = if movie_count == 0 {
        view! { <div class="card__relations-empty">"Sin películas asignadas"</div> }.into_any()
    } else {
        view! {
            <div class="card__relations">
                <p class="card__relations-title">{format!("Películas ({}):", movie_count)}</p>
                <div class="card__badges">
                    {preview
                        .into_iter()
                        .map(|title| view! { <Badge variant="primary">{title}</Badge> })
                        .collect_view()}
                    {(hidden > 0).then(|| view! {
                        <Badge variant="primary">{format!("+{} más", hidden)}</Badge>
                    })}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="card category-card">
            <div class="card__header">
                <div class="card__heading">
                    <h3 class="card__title">{category.name}</h3>
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
                    <p>{category.description}</p>
                </div>
                {relations}
            </div>
        </div>
    }
}
