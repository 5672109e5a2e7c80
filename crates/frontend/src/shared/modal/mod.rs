use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog shell used by the create/edit forms and the delete confirmation.
///
/// Closes on Escape, on the header close button and on a click outside the
/// surface.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Optional line under the title
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Extra class on the surface, e.g. a width modifier
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=move || format!("modal {}", class.get().unwrap_or_default())
                role="dialog"
                on:click=stop_propagation
            >
                <div class="modal-header">
                    <div class="modal-header-text">
                        <h2 class="modal-title">{title}</h2>
                        {move || description.get().map(|d| view! {
                            <p class="modal-description">{d}</p>
                        })}
                    </div>
                    <button
                        class="button button--icon modal__close"
                        title="Cerrar"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
