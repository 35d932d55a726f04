#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{LeaveRequestRecord, UserResponse};
    use crate::state::auth::AuthState;
    use chrono::NaiveDate;
    use leptos::*;

    pub fn admin_user(system_admin: bool) -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            full_name: "Admin User".into(),
            email: "admin@example.com".into(),
            employee_id: "E-1".into(),
            role: "admin".into(),
            is_system_admin: system_admin,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-regular".into(),
            full_name: "Regular User".into(),
            email: "member@example.com".into(),
            employee_id: "E-2".into(),
            role: "employee".into(),
            is_system_admin: false,
        }
    }

    pub fn leave_request(id: &str, status: &str) -> LeaveRequestRecord {
        LeaveRequestRecord {
            id: id.into(),
            employee_name: format!("Employee {}", id),
            employee_email: format!("{}@example.com", id),
            employee_id: format!("E-{}", id),
            leave_type: "Casual".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
            reason: Some("errand".into()),
            status: status.into(),
            chairman_remarks: None,
            actioned_by_role: None,
            actioned_by_name: None,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated: true,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
