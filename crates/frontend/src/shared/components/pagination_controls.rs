use crate::shared::icons::icon;
use leptos::prelude::*;

/// Number of page buttons shown around the current page
const PAGE_WINDOW: u32 = 5;

/// Page numbers to render as buttons: a window of at most `width` pages
/// centred on `current`, clamped to `1..=last`.
pub fn page_window(current: u32, last: u32, width: u32) -> Vec<u32> {
    let last = last.max(1);
    let current = current.clamp(1, last);
    let width = width.clamp(1, last);

    let half = width / 2;
    let mut start = current.saturating_sub(half).max(1);
    if start + width - 1 > last {
        start = last + 1 - width;
    }
    (start..start + width).collect()
}

/// PaginationControls component - page navigation for the card grids
///
/// Pages are 1-based, matching the backend's `page`/`lastPage`.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Last page reported by the server
    #[prop(into)]
    last_page: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= last_page.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="Primera página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>

            {move || {
                let current = current_page.get();
                page_window(current, last_page.get(), PAGE_WINDOW)
                    .into_iter()
                    .map(|page| {
                        let class = if page == current {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button class=class on:click=move |_| on_page_change.run(page)>
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < last_page.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page.get().max(1))
                disabled=is_last
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", current_page.get(), last_page.get().max(1), total_count.get())}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centred() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_clamped_at_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_fewer_pages_than_width() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), vec![1]);
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_window(42, 4, 3), vec![2, 3, 4]);
        assert_eq!(page_window(0, 4, 3), vec![1, 2, 3]);
    }
}
