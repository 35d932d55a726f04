use crate::api::LoginRequest;
use crate::components::layout::ErrorMessage;
use crate::state::auth::use_login_action;
use leptos::*;
use leptos_meta::Title;

fn form_ready(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let login_action = use_login_action();
    let pending = login_action.pending();
    let login_error = Signal::derive(move || {
        login_action
            .value()
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });

    {
        create_effect(move |_| {
            if let Some(Ok(())) = login_action.value().get() {
                if let Some(win) = web_sys::window() {
                    let _ = win.location().set_href("/dashboard");
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() || !form_ready(&email.get_untracked(), &password.get_untracked())
        {
            return;
        }
        login_action.dispatch(LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <Title text="Sign in | Leavedesk"/>
            <div class="w-full max-w-md bg-white shadow rounded-lg p-8">
                <h1 class="text-2xl font-bold text-gray-900 text-center">"Leavedesk"</h1>
                <p class="text-sm text-gray-500 text-center mt-1 mb-6">"Sign in to continue"</p>
                <Show when=move || login_error.get().is_some()>
                    <ErrorMessage message={login_error.get().unwrap_or_default()} />
                </Show>
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Email"}</label>
                        <input
                            type="email"
                            class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700">{"Password"}</label>
                        <input
                            type="password"
                            class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full inline-flex justify-center px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::form_ready;

    #[test]
    fn form_requires_email_and_password() {
        assert!(!form_ready("", ""));
        assert!(!form_ready("alice@example.com", ""));
        assert!(!form_ready("   ", "secret"));
        assert!(form_ready("alice@example.com", "secret"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_page_renders_credential_fields() {
        let html = render_to_string(move || view! { <LoginPage /> });
        assert!(html.contains("Sign in to continue"));
        assert!(html.contains("Email"));
        assert!(html.contains("Password"));
    }
}
