use crate::pages::leave::{
    components::{form::LeaveRequestForm, list::MyRequestsList},
    layout::LeaveLayout,
    utils::LeaveFormState,
    view_model::LeaveViewModel,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LeavePage() -> impl IntoView {
    let form_state = LeaveFormState::default();
    let vm = LeaveViewModel::new(form_state);
    let loading = vm.requests_resource.loading();

    view! {
        <LeaveLayout>
            <Title text="My Leave | Leavedesk"/>
            <LeaveRequestForm
                state=form_state
                message=vm.form_message
                action=vm.submit_action
            />
            <MyRequestsList
                requests=vm.my_requests()
                loading=Signal::derive(move || loading.get())
                error=vm.load_error()
            />
        </LeaveLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::helpers::{provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn leave_page_renders_form_and_list() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            provide_context(ApiClient::new_with_base_url("http://mock.invalid/api"));
            view! { <LeavePage /> }
        });
        assert!(html.contains("Apply for Leave"));
        assert!(html.contains("My Leave Requests"));
    }
}
