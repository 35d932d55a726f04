use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 mt-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col sm:flex-row items-center justify-between gap-3">
                <p class="text-sm text-gray-500">{"Leavedesk — HR leave management"}</p>
                <nav class="flex gap-4 text-sm text-gray-500">
                    <a href="/dashboard" class="hover:text-gray-900">{"Dashboard"}</a>
                    <a href="/leave" class="hover:text-gray-900">{"My Leave"}</a>
                </nav>
            </div>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn footer_renders_product_name_and_links() {
        let html = render_to_string(move || view! { <Footer /> });
        assert!(html.contains("Leavedesk"));
        assert!(html.contains("/dashboard"));
        assert!(html.contains("/leave"));
    }
}
