use crate::api::{ApiClient, ApiError, LeaveAction, LeaveRequestRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct ManageRepository {
    client: Rc<ApiClient>,
}

impl ManageRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_leave_requests(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        self.client.list_leave_requests().await
    }

    pub async fn action_leave_request(
        &self,
        id: &str,
        action: LeaveAction,
        remarks: &str,
    ) -> Result<(), ApiError> {
        self.client
            .action_leave_request(id, action, remarks)
            .await
            .map(|_| ())
    }

    pub async fn delete_leave_request(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_leave_request(id).await.map(|_| ())
    }
}
