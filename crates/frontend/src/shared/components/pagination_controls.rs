use leptos::prelude::*;

/// PaginationControls component - one clickable indicator per page
///
/// Pages are 1-based; the current page gets the `active` class.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when a page indicator is clicked
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <ul class="pagination">
            {move || {
                let current = current_page.get();
                (1..=total_pages.get())
                    .map(|page| {
                        view! {
                            <li class="page-item" class:active=move || page == current>
                                <a
                                    class="page-link"
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page.to_string()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
