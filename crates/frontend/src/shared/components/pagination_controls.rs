use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - Previous / numbered pages / Next
///
/// Pages are 1-indexed. Previous and Next are delegated to the owner, which clamps.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when a numbered page is picked
    on_page_change: Callback<usize>,

    /// Previous page; the owner clamps at the first page
    on_prev: Callback<()>,

    /// Next page; the owner clamps at the last page
    on_next: Callback<()>,
) -> impl IntoView {
    let go_to = move |page: usize| {
        if page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
                " Previous"
            </button>
            {move || {
                let page = current_page.get();
                (1..=total_pages.get())
                    .map(|n| {
                        view! {
                            <button
                                class={if n == page { "pagination-btn pagination-btn--active" } else { "pagination-btn" }}
                                on:click=move |_| go_to(n)
                            >
                                {n.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
