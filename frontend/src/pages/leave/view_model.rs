use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequestRecord};
use crate::pages::leave::{repository::LeaveRepository, utils::MessageState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub form_message: RwSignal<MessageState>,
    pub requests_resource: Resource<u32, Result<Vec<LeaveRequestRecord>, ApiError>>,
    pub submit_action: Action<CreateLeaveRequest, Result<(), ApiError>>,
}

fn apply_submit_result(
    result: Option<Result<(), ApiError>>,
    form_message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) -> bool {
    match result {
        Some(Ok(_)) => {
            form_message.update(|msg| msg.set_success("Leave request submitted."));
            reload.update(|value| *value = value.wrapping_add(1));
            true
        }
        Some(Err(err)) => {
            form_message.update(|msg| msg.set_error(err));
            false
        }
        None => false,
    }
}

impl LeaveViewModel {
    pub fn new(form_state: crate::pages::leave::utils::LeaveFormState) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeaveRepository::new(api));

        let form_message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_my_requests().await }
            },
        );

        let submit_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit_leave(payload).await }
        });

        {
            create_effect(move |_| {
                if apply_submit_result(submit_action.value().get(), form_message, reload) {
                    form_state.reset();
                }
            });
        }

        Self {
            form_message,
            requests_resource,
            submit_action,
        }
    }

    pub fn my_requests(&self) -> Signal<Vec<LeaveRequestRecord>> {
        let resource = self.requests_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.requests_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::leave::utils::LeaveFormState;
    use crate::test_support::helpers::leave_request;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn submit_result_updates_message_and_reload() {
        with_runtime(|| {
            let form_message = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);

            assert!(apply_submit_result(Some(Ok(())), form_message, reload));
            assert_eq!(
                form_message.get().success.as_deref(),
                Some("Leave request submitted.")
            );
            assert_eq!(reload.get(), 1);

            assert!(!apply_submit_result(
                Some(Err(ApiError::validation("bad dates"))),
                form_message,
                reload
            ));
            assert_eq!(
                form_message.get().error.map(|err| err.error),
                Some("bad dates".to_string())
            );
            assert_eq!(reload.get(), 1);

            assert!(!apply_submit_result(None, form_message, reload));
        });
    }

    #[test]
    fn my_requests_follow_the_resource() {
        let _ = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://mock.invalid/api"));
            let vm = LeaveViewModel::new(LeaveFormState::default());
            vm.requests_resource
                .set(Ok(vec![leave_request("lr-1", "Pending")]));
            assert_eq!(vm.my_requests().get().len(), 1);
            assert!(vm.load_error().get().is_none());

            vm.requests_resource
                .set(Err(ApiError::unknown("backend down")));
            assert!(vm.my_requests().get().is_empty());
            assert_eq!(
                vm.load_error().get().map(|err| err.error),
                Some("backend down".to_string())
            );
            view! { <div>"done"</div> }
        });
    }
}
