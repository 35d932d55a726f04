use crate::pages::manage::utils::ManageFilterState;
use leptos::*;

#[component]
pub fn ManageSearch(filter: ManageFilterState) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 px-6 py-4 border-b border-gray-200">
            <input
                type="text"
                placeholder="Search by employee name or email"
                class="w-full max-w-md border border-gray-300 rounded-md px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || filter.search()
                value=move || filter.search()
                on:input=move |ev| filter.set_search(event_target_value(&ev))
            />
            <Show when=move || !filter.search().is_empty()>
                <button
                    class="text-sm text-gray-500 hover:text-gray-900"
                    on:click=move |_| filter.clear_search()
                >
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
