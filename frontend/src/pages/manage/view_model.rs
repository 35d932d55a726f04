use crate::api::{ApiClient, ApiError, LeaveAction, LeaveRequestRecord};
use crate::pages::manage::{
    repository::ManageRepository,
    utils::{
        filter_requests, visible_window, ActionPhase, ManageFilterState, RemarksDrafts,
        RowActionStates,
    },
};
use leptos::*;

#[derive(Clone)]
pub struct LeaveActionPayload {
    pub id: String,
    pub action: LeaveAction,
    pub remarks: String,
}

type ActionOutcome = (String, LeaveAction, Result<(), ApiError>);
type DeleteOutcome = (String, Result<(), ApiError>);

#[derive(Clone, Copy)]
pub struct ManageViewModel {
    pub filter: ManageFilterState,
    pub drafts: RemarksDrafts,
    pub row_states: RowActionStates,
    pub action_message: RwSignal<Option<String>>,
    pub action_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<LeaveRequestRecord>>,
    pub requests_resource: Resource<u32, Result<Vec<LeaveRequestRecord>, ApiError>>,
    pub action_action: Action<LeaveActionPayload, ActionOutcome>,
    pub delete_action: Action<String, DeleteOutcome>,
}

fn action_success_message(action: LeaveAction) -> &'static str {
    match action {
        LeaveAction::Approve => "Leave request approved.",
        LeaveAction::Reject => "Leave request rejected.",
    }
}

fn apply_action_result(
    value: Option<ActionOutcome>,
    drafts: RemarksDrafts,
    row_states: RowActionStates,
    action_message: RwSignal<Option<String>>,
    action_error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
) {
    if let Some((id, action, result)) = value {
        match result {
            Ok(_) => {
                row_states.set_phase(&id, ActionPhase::Done);
                drafts.clear(&id);
                action_error.set(None);
                action_message.set(Some(action_success_message(action).to_string()));
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => {
                row_states.set_phase(&id, ActionPhase::Failed);
                action_message.set(None);
                action_error.set(Some(err));
            }
        }
    }
}

fn apply_delete_result(
    value: Option<DeleteOutcome>,
    row_states: RowActionStates,
    action_message: RwSignal<Option<String>>,
    action_error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
) {
    if let Some((id, result)) = value {
        match result {
            Ok(_) => {
                row_states.set_phase(&id, ActionPhase::Done);
                action_error.set(None);
                action_message.set(Some("Leave request deleted.".to_string()));
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => {
                row_states.set_phase(&id, ActionPhase::Failed);
                action_message.set(None);
                action_error.set(Some(err));
            }
        }
    }
}

impl ManageViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(ManageRepository::new(api));

        let filter = ManageFilterState::default();
        let drafts = RemarksDrafts::default();
        let row_states = RowActionStates::default();
        let action_message = create_rw_signal(None::<String>);
        let action_error = create_rw_signal(None::<ApiError>);
        let pending_delete = create_rw_signal(None::<LeaveRequestRecord>);
        let reload = create_rw_signal(0u32);

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.list_leave_requests().await }
            },
        );

        let action_action = create_action(move |payload: &LeaveActionPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move {
                let result = repo
                    .action_leave_request(&payload.id, payload.action, &payload.remarks)
                    .await;
                (payload.id, payload.action, result)
            }
        });

        let delete_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move {
                let result = repo.delete_leave_request(&id).await;
                (id, result)
            }
        });

        {
            create_effect(move |_| {
                apply_action_result(
                    action_action.value().get(),
                    drafts,
                    row_states,
                    action_message,
                    action_error,
                    reload,
                );
            });
        }

        {
            create_effect(move |_| {
                apply_delete_result(
                    delete_action.value().get(),
                    row_states,
                    action_message,
                    action_error,
                    reload,
                );
            });
        }

        // Success banners fade out on their own in the browser.
        {
            create_effect(move |_| {
                if let Some(text) = action_message.get() {
                    #[cfg(target_arch = "wasm32")]
                    {
                        let shown = text.clone();
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(4_000).await;
                            action_message.update(|msg| {
                                if msg.as_deref() == Some(shown.as_str()) {
                                    *msg = None;
                                }
                            });
                        });
                    }
                    let _ = text;
                }
            });
        }

        Self {
            filter,
            drafts,
            row_states,
            action_message,
            action_error,
            pending_delete,
            requests_resource,
            action_action,
            delete_action,
        }
    }

    pub fn filtered(&self) -> Signal<Vec<LeaveRequestRecord>> {
        let resource = self.requests_resource;
        let filter = self.filter;
        Signal::derive(move || {
            let all = resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default();
            filter_requests(&all, &filter.search())
        })
    }

    pub fn visible(&self) -> Signal<Vec<LeaveRequestRecord>> {
        let filtered = self.filtered();
        let filter = self.filter;
        Signal::derive(move || visible_window(&filtered.get(), filter.scroll_idx()))
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.requests_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    /// Approve/reject with the row's current draft, forwarded verbatim
    /// (an empty draft included). Ignored while the row is already in
    /// flight.
    pub fn dispatch_action(&self, id: &str, action: LeaveAction) {
        if self.row_states.is_submitting(id) {
            return;
        }
        self.row_states.set_phase(id, ActionPhase::Submitting);
        self.action_action.dispatch(LeaveActionPayload {
            id: id.to_string(),
            action,
            remarks: self.drafts.draft(id),
        });
    }

    pub fn request_delete(&self, record: LeaveRequestRecord) {
        self.pending_delete.set(Some(record));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        let Some(record) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        if self.row_states.is_submitting(&record.id) {
            return;
        }
        self.row_states.set_phase(&record.id, ActionPhase::Submitting);
        self.delete_action.dispatch(record.id);
    }
}

pub fn use_manage_view_model() -> ManageViewModel {
    match use_context::<ManageViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ManageViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::leave_request;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn action_result_clears_draft_and_reloads() {
        with_runtime(|| {
            let drafts = RemarksDrafts::default();
            let row_states = RowActionStates::default();
            let action_message = create_rw_signal(None::<String>);
            let action_error = create_rw_signal(None::<ApiError>);
            let reload = create_rw_signal(0u32);

            drafts.set("lr-1", "ok".into());
            row_states.set_phase("lr-1", ActionPhase::Submitting);

            apply_action_result(
                Some(("lr-1".into(), LeaveAction::Approve, Ok(()))),
                drafts,
                row_states,
                action_message,
                action_error,
                reload,
            );
            assert_eq!(row_states.phase("lr-1"), ActionPhase::Done);
            assert_eq!(drafts.draft("lr-1"), "");
            assert_eq!(
                action_message.get().as_deref(),
                Some("Leave request approved.")
            );
            assert!(action_error.get().is_none());
            assert_eq!(reload.get(), 1);

            row_states.set_phase("lr-2", ActionPhase::Submitting);
            apply_action_result(
                Some((
                    "lr-2".into(),
                    LeaveAction::Reject,
                    Err(ApiError::unknown("backend down")),
                )),
                drafts,
                row_states,
                action_message,
                action_error,
                reload,
            );
            assert_eq!(row_states.phase("lr-2"), ActionPhase::Failed);
            assert!(action_message.get().is_none());
            assert_eq!(
                action_error.get().map(|err| err.error),
                Some("backend down".to_string())
            );
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn delete_result_updates_message_and_reloads() {
        with_runtime(|| {
            let row_states = RowActionStates::default();
            let action_message = create_rw_signal(None::<String>);
            let action_error = create_rw_signal(None::<ApiError>);
            let reload = create_rw_signal(0u32);

            row_states.set_phase("lr-1", ActionPhase::Submitting);
            apply_delete_result(
                Some(("lr-1".into(), Ok(()))),
                row_states,
                action_message,
                action_error,
                reload,
            );
            assert_eq!(row_states.phase("lr-1"), ActionPhase::Done);
            assert_eq!(
                action_message.get().as_deref(),
                Some("Leave request deleted.")
            );
            assert_eq!(reload.get(), 1);

            apply_delete_result(
                Some(("lr-1".into(), Err(ApiError::unknown("delete failed")))),
                row_states,
                action_message,
                action_error,
                reload,
            );
            assert_eq!(row_states.phase("lr-1"), ActionPhase::Failed);
            assert!(action_message.get().is_none());
            assert_eq!(
                action_error.get().map(|err| err.error),
                Some("delete failed".to_string())
            );
        });
    }

    #[test]
    fn filtered_and_visible_follow_search_and_window() {
        let _ = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://mock.invalid/api"));
            let vm = ManageViewModel::new();

            let mut records: Vec<LeaveRequestRecord> = (0..25)
                .map(|i| leave_request(&format!("lr-{}", i), "Pending"))
                .collect();
            records[3].employee_name = "Priya Sharma".into();
            vm.requests_resource.set(Ok(records));

            assert_eq!(vm.filtered().get().len(), 25);
            assert_eq!(vm.visible().get().len(), 10);

            vm.filter.next_page(25);
            assert_eq!(vm.visible().get()[0].id, "lr-10");

            vm.filter.set_search("priya".into());
            assert_eq!(vm.filter.scroll_idx(), 0);
            let visible = vm.visible().get();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].id, "lr-3");

            view! { <div>{vm.filtered().get().len()}</div> }
        });
    }

    #[test]
    fn delete_confirmation_holds_the_record_until_resolved() {
        let _ = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://mock.invalid/api"));
            let vm = ManageViewModel::new();
            let record = leave_request("lr-7", "Pending");

            vm.request_delete(record.clone());
            assert_eq!(
                vm.pending_delete.get_untracked().map(|r| r.id),
                Some("lr-7".to_string())
            );

            vm.cancel_delete();
            assert!(vm.pending_delete.get_untracked().is_none());

            view! { <div>{record.id}</div> }
        });
    }

    #[test]
    fn use_manage_view_model_reuses_context() {
        let _ = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://mock.invalid/api"));
            let vm = ManageViewModel::new();
            vm.filter.set_search("shared".into());
            provide_context(vm);

            let used = use_manage_view_model();
            assert_eq!(used.filter.search(), "shared");
            view! { <div>{used.filter.search()}</div> }
        });
    }
}
