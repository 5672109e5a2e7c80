use leptos::prelude::*;

/// Small pill label; used for the related entities on a card
#[component]
pub fn Badge(
    /// "primary", "secondary" (default) or "success"
    #[prop(optional)]
    variant: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant.unwrap_or("secondary") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        _ => "badge--secondary",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}
