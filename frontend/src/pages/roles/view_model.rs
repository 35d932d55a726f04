use crate::api::{ApiClient, ApiError, UserResponse};
use crate::pages::roles::{repository::RolesRepository, utils::RoleDrafts};
use leptos::*;

#[derive(Clone)]
pub struct AssignRolePayload {
    pub user_id: String,
    pub role: String,
}

type AssignOutcome = (String, Result<(), ApiError>);

#[derive(Clone, Copy)]
pub struct RolesViewModel {
    pub drafts: RoleDrafts,
    pub saving_user: RwSignal<Option<String>>,
    pub action_message: RwSignal<Option<String>>,
    pub action_error: RwSignal<Option<ApiError>>,
    pub users_resource: Resource<u32, Result<Vec<UserResponse>, ApiError>>,
    pub assign_action: Action<AssignRolePayload, AssignOutcome>,
}

fn apply_assign_result(
    value: Option<AssignOutcome>,
    drafts: RoleDrafts,
    saving_user: RwSignal<Option<String>>,
    action_message: RwSignal<Option<String>>,
    action_error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
) {
    if let Some((user_id, result)) = value {
        saving_user.set(None);
        match result {
            Ok(_) => {
                drafts.clear(&user_id);
                action_error.set(None);
                action_message.set(Some("Role updated.".to_string()));
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => {
                action_message.set(None);
                action_error.set(Some(err));
            }
        }
    }
}

impl RolesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(RolesRepository::new(api));

        let drafts = RoleDrafts::default();
        let saving_user = create_rw_signal(None::<String>);
        let action_message = create_rw_signal(None::<String>);
        let action_error = create_rw_signal(None::<ApiError>);
        let reload = create_rw_signal(0u32);

        let users_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_users().await }
            },
        );

        let assign_action = create_action(move |payload: &AssignRolePayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move {
                let result = repo.assign_role(&payload.user_id, &payload.role).await;
                (payload.user_id, result)
            }
        });

        {
            create_effect(move |_| {
                apply_assign_result(
                    assign_action.value().get(),
                    drafts,
                    saving_user,
                    action_message,
                    action_error,
                    reload,
                );
            });
        }

        Self {
            drafts,
            saving_user,
            action_message,
            action_error,
            users_resource,
            assign_action,
        }
    }

    pub fn users(&self) -> Signal<Vec<UserResponse>> {
        let resource = self.users_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.users_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    /// One assignment in flight at a time; repeated clicks are no-ops.
    pub fn dispatch_assign(&self, user_id: &str, role: String) {
        if self.saving_user.get_untracked().is_some() {
            return;
        }
        self.saving_user.set(Some(user_id.to_string()));
        self.assign_action.dispatch(AssignRolePayload {
            user_id: user_id.to_string(),
            role,
        });
    }
}

pub fn use_roles_view_model() -> RolesViewModel {
    match use_context::<RolesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RolesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn assign_result_clears_draft_and_reloads() {
        with_runtime(|| {
            let drafts = RoleDrafts::default();
            let saving_user = create_rw_signal(Some("u1".to_string()));
            let action_message = create_rw_signal(None::<String>);
            let action_error = create_rw_signal(None::<ApiError>);
            let reload = create_rw_signal(0u32);

            drafts.select("u1", "manager".into());
            apply_assign_result(
                Some(("u1".into(), Ok(()))),
                drafts,
                saving_user,
                action_message,
                action_error,
                reload,
            );
            assert!(saving_user.get().is_none());
            assert_eq!(drafts.selected("u1", "employee"), "employee");
            assert_eq!(action_message.get().as_deref(), Some("Role updated."));
            assert_eq!(reload.get(), 1);

            saving_user.set(Some("u2".to_string()));
            apply_assign_result(
                Some(("u2".into(), Err(ApiError::unknown("forbidden")))),
                drafts,
                saving_user,
                action_message,
                action_error,
                reload,
            );
            assert!(saving_user.get().is_none());
            assert!(action_message.get().is_none());
            assert_eq!(
                action_error.get().map(|err| err.error),
                Some("forbidden".to_string())
            );
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn users_follow_the_resource() {
        let _ = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://mock.invalid/api"));
            let vm = RolesViewModel::new();
            vm.users_resource.set(Ok(vec![UserResponse {
                id: "u1".into(),
                full_name: "Alice Example".into(),
                email: "alice@example.com".into(),
                employee_id: "E-100".into(),
                role: "employee".into(),
                is_system_admin: false,
            }]));
            assert_eq!(vm.users().get().len(), 1);
            assert!(vm.load_error().get().is_none());
            view! { <div>"done"</div> }
        });
    }
}
