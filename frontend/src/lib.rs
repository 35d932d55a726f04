use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::{DashboardPage, HomePage, LeavePage, LoginPage, ManagePage, RolesPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <crate::state::auth::AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/leave" view=ProtectedLeave/>
                    <Route path="/admin/leave" view=ProtectedManage/>
                    <Route path="/admin/roles" view=ProtectedRoles/>
                </Routes>
            </Router>
        </crate::state::auth::AuthProvider>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Leavedesk frontend");

    // Runtime config load first so the first API call already has its base URL.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(App);
    });
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    run();
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><DashboardPage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedLeave() -> impl IntoView {
    view! { <crate::components::guard::RequireAuth><LeavePage/></crate::components::guard::RequireAuth> }
}

#[component]
fn ProtectedManage() -> impl IntoView {
    view! { <crate::components::guard::RequireAdmin><ManagePage/></crate::components::guard::RequireAdmin> }
}

#[component]
fn ProtectedRoles() -> impl IntoView {
    view! { <crate::components::guard::RequireAdmin><RolesPage/></crate::components::guard::RequireAdmin> }
}
