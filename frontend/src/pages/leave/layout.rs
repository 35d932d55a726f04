use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn LeaveLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="px-4 sm:px-0 mb-6">
                <h2 class="text-2xl font-bold text-gray-900">"My Leave"</h2>
                <p class="text-sm text-gray-500 mt-1">
                    "Apply for leave and track your past requests."
                </p>
            </div>
            <div class="space-y-6">{children()}</div>
        </Layout>
    }
}
