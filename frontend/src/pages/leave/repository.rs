use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequestRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit_leave(&self, payload: CreateLeaveRequest) -> Result<(), ApiError> {
        self.client.create_leave_request(payload).await.map(|_| ())
    }

    pub async fn list_my_requests(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        self.client.list_my_leave_requests().await
    }
}
