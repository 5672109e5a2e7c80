//! TopHeader component - application top navigation bar.
//!
//! Brand on the left, one link per section on the right. The link for the
//! current route is highlighted.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// (href, label, icon)
const NAV_ITEMS: [(&str, &str, &str); 3] = [
    ("/", "Inicio", "home"),
    ("/movies", "Películas", "film"),
    ("/categories", "Categorías", "folder-open"),
];

/// Whether the link to `href` is the current section.
/// The root only matches itself; other links also match their sub-paths.
pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/" || pathname.is_empty();
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="top-header">
            <div class="top-header__brand">
                {icon("film")}
                <span class="top-header__title">"Catálogo de Películas"</span>
            </div>

            <div class="top-header__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label, icon_name)| {
                        let class = move || {
                            if is_active(&pathname.get(), href) {
                                "top-header__link top-header__link--active"
                            } else {
                                "top-header__link"
                            }
                        };
                        view! {
                            <A href=href attr:class=class>
                                {icon(icon_name)}
                                <span>{label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/movies", "/"));
    }

    #[test]
    fn test_section_matches_sub_paths() {
        assert!(is_active("/movies", "/movies"));
        assert!(is_active("/movies/12", "/movies"));
        assert!(!is_active("/movies-archive", "/movies"));
        assert!(!is_active("/categories", "/movies"));
    }
}
