use crate::pages::manage::utils::{has_next, has_prev, page_number, ManageFilterState};
use leptos::*;

#[component]
pub fn ManagePagination(
    filter: ManageFilterState,
    filtered_len: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between px-6 py-3 border-t border-gray-200">
            <button
                class="px-3 py-1 rounded border border-gray-300 text-sm text-gray-700 hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || !has_prev(filter.scroll_idx())
                on:click=move |_| filter.prev_page()
            >
                "Previous"
            </button>
            <span class="text-sm text-gray-600">
                {move || format!("Page {}", page_number(filter.scroll_idx()))}
            </span>
            <button
                class="px-3 py-1 rounded border border-gray-300 text-sm text-gray-700 hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || !has_next(filter.scroll_idx(), filtered_len.get())
                on:click=move |_| filter.next_page(filtered_len.get())
            >
                "Next"
            </button>
        </div>
    }
}
