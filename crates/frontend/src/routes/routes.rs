use crate::domain::a001_movie::ui::list::MoviesPage;
use crate::domain::a002_category::ui::list::CategoriesPage;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            {icon("alert")}
            <h1 class="page-header__title">"Página no encontrada"</h1>
            <A href="/">"Volver al inicio"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/movies") view=MoviesPage />
                    <Route path=path!("/categories") view=CategoriesPage />
                </Routes>
            </Shell>
        </Router>
    }
}
