use crate::components::layout::LoadingSpinner;
use crate::state::auth::use_auth;
use leptos::*;

/// Landing route: forwards to the dashboard once the auth check settles,
/// or to the login form when there is no session.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = if state.is_authenticated {
            "/dashboard"
        } else {
            "/login"
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <LoadingSpinner/>
        </div>
    }
}
