use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Destructive-action confirmation: Cancel / confirm pair inside a [`Modal`]
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    /// Label of the confirm button
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = move || confirm_label.get().unwrap_or_else(|| "Eliminar".to_string());

    view! {
        <Modal title=title on_close=on_cancel class="modal--narrow">
            <p class="confirm-dialog__message">{message}</p>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="button--danger"
                    on_click=move |_| on_confirm.run(())
                >
                    {icon("delete")}
                    " "
                    {confirm_label}
                </Button>
            </div>
        </Modal>
    }
}
