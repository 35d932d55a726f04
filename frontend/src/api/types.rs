use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub employee_id: String,
    pub role: String,
    #[serde(default)]
    pub is_system_admin: bool,
}

/// One leave request as the backend returns it. `status` is compared
/// case-insensitively everywhere but rendered exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestRecord {
    pub id: String,
    pub employee_name: String,
    pub employee_email: String,
    pub employee_id: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: String,
    #[serde(default)]
    pub chairman_remarks: Option<String>,
    #[serde(default)]
    pub actioned_by_role: Option<String>,
    #[serde(default)]
    pub actioned_by_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveAction {
    Approve,
    Reject,
}

impl LeaveAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveAction::Approve => "approve",
            LeaveAction::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveActionRequest {
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_create_leave_request_snake_case_fields() {
        let req = CreateLeaveRequest {
            leave_type: "Casual".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
            reason: Some("family".into()),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["leave_type"], serde_json::json!("Casual"));
        assert_eq!(v["start_date"], serde_json::json!("2025-03-10"));
        assert_eq!(v["end_date"], serde_json::json!("2025-03-12"));
        assert_eq!(v["reason"], serde_json::json!("family"));
    }

    #[wasm_bindgen_test]
    fn deserialize_leave_request_record_with_missing_optionals() {
        let raw = r#"{
            "id": "lr-1",
            "employee_name": "Alice Example",
            "employee_email": "alice@example.com",
            "employee_id": "E-100",
            "leave_type": "Paid",
            "start_date": "2025-04-01",
            "end_date": "2025-04-02",
            "status": "Pending"
        }"#;
        let record: LeaveRequestRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.status, "Pending");
        assert!(record.reason.is_none());
        assert!(record.chairman_remarks.is_none());
        assert!(record.actioned_by_name.is_none());
    }
}
