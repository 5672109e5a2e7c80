pub mod global_context;
pub mod notification_service;
pub mod top_header;

use leptos::prelude::*;
use notification_service::NotificationHost;
use top_header::TopHeader;

use global_context::use_catalog;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              page content                |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let catalog = use_catalog();

    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {children()}
            </main>
            <NotificationHost service=catalog.notifications />
        </div>
    }
}
