use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn ManageLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="px-4 sm:px-0 mb-6">
                <h2 class="text-2xl font-bold text-gray-900">"Leave Approvals"</h2>
                <p class="text-sm text-gray-500 mt-1">
                    "Review, approve, or reject employee leave requests."
                </p>
            </div>
            <div class="space-y-4">{children()}</div>
        </Layout>
    }
}
