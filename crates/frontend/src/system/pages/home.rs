use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Landing page: one entry card per section
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <div class="home-page__intro">
                <h1 class="home-page__title">"Catálogo de Películas"</h1>
                <p class="home-page__subtitle">
                    "Administra películas y categorías desde un solo lugar"
                </p>
            </div>

            <div class="home-page__cards">
                <div class="card home-card">
                    <div class="home-card__icon home-card__icon--movies">{icon("film")}</div>
                    <h2 class="card__title">"Películas"</h2>
                    <p class="card__description">
                        "Gestiona tu catálogo de películas, asigna categorías y mantén tu colección organizada"
                    </p>
                    <A href="/movies" attr:class="button button--primary home-card__action">
                        "Gestionar Películas"
                    </A>
                </div>

                <div class="card home-card">
                    <div class="home-card__icon home-card__icon--categories">{icon("folder-open")}</div>
                    <h2 class="card__title">"Categorías"</h2>
                    <p class="card__description">
                        "Organiza tus películas por categorías, crea nuevas clasificaciones y asigna películas"
                    </p>
                    <A href="/categories" attr:class="button button--success home-card__action">
                        "Gestionar Categorías"
                    </A>
                </div>
            </div>
        </div>
    }
}
