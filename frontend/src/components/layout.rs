use crate::{
    components::{footer::Footer, scroll_progress::ScrollProgressBar},
    state::auth::{self, is_admin_user, use_auth},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let can_access_admin = move || is_admin_user(auth.get().user.as_ref());
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    {
        create_effect(move |_| {
            if logout_action.value().get().is_some() {
                if let Some(win) = web_sys::window() {
                    let _ = win.location().set_href("/login");
                }
            }
        });
    }
    let on_logout = {
        move |_| {
            if logout_pending.get_untracked() {
                return;
            }
            set_menu_open.set(false);
            logout_action.dispatch(());
        }
    };
    let toggle_menu = { move |_| set_menu_open.update(|open| *open = !*open) };
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-gray-900">
                            "Leavedesk"
                        </h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            <a href="/dashboard" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50">
                                "Dashboard"
                            </a>
                            <a href="/leave" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50">
                                "My Leave"
                            </a>
                            <Show when=move || can_access_admin()>
                                <a href="/admin/leave" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50">
                                    "Leave Approvals"
                                </a>
                                <a href="/admin/roles" class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50">
                                    "Roles"
                                </a>
                            </Show>
                            <button
                                on:click=on_logout
                                class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-gray-50"
                                disabled={move || logout_pending.get()}
                            >
                                "Logout"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-500 hover:text-gray-900 hover:bg-gray-50"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-gray-200">
                        <nav class="px-4 py-3 space-y-2">
                            <a
                                href="/dashboard"
                                class="block text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "Dashboard"
                            </a>
                            <a
                                href="/leave"
                                class="block text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                "My Leave"
                            </a>
                            <Show when=move || can_access_admin()>
                                <a
                                    href="/admin/leave"
                                    class="block text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Leave Approvals"
                                </a>
                                <a
                                    href="/admin/roles"
                                    class="block text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Roles"
                                </a>
                            </Show>
                            <button
                                on:click=on_logout
                                class="w-full text-left text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-gray-50"
                                disabled={move || logout_pending.get()}
                            >
                                "Logout"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <ScrollProgressBar/>
            <Header/>
            <main class="max-w-7xl mx-auto w-full py-6 sm:px-6 lg:px-8 flex-1">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_admin_links_for_admin() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user(true)));
            view! { <Header /> }
        });
        assert!(html.contains("Leave Approvals"));
        assert!(html.contains("Roles"));
    }

    #[test]
    fn header_hides_admin_links_for_regular_user() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Header /> }
        });
        assert!(!html.contains("Leave Approvals"));
    }

    #[test]
    fn layout_renders_children_and_footer() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("HR leave management"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
