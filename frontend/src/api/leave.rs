use super::{
    client::ApiClient,
    types::{
        ApiError, CreateLeaveRequest, LeaveAction, LeaveActionRequest, LeaveRequestRecord,
        MessageResponse,
    },
};

impl ApiClient {
    /// Full collection, every employee. Admin-only on the backend.
    pub async fn list_leave_requests(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(
            self.http_client()
                .get(format!("{}/leave-requests", base_url)),
        );
        let response = self.send(request).await?;
        self.map_response(response).await
    }

    pub async fn list_my_leave_requests(&self) -> Result<Vec<LeaveRequestRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(
            self.http_client()
                .get(format!("{}/leave-requests/me", base_url)),
        );
        let response = self.send(request).await?;
        self.map_response(response).await
    }

    pub async fn create_leave_request(
        &self,
        request: CreateLeaveRequest,
    ) -> Result<LeaveRequestRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(
            self.http_client()
                .post(format!("{}/leave-requests", base_url))
                .json(&request),
        );
        let response = self.send(request).await?;
        self.map_response(response).await
    }

    /// Approve or reject. `remarks` is forwarded verbatim, empty included;
    /// whether empty remarks are acceptable is the backend's call.
    pub async fn action_leave_request(
        &self,
        id: &str,
        action: LeaveAction,
        remarks: &str,
    ) -> Result<LeaveRequestRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(
            self.http_client()
                .put(format!(
                    "{}/leave-requests/{}/{}",
                    base_url,
                    id,
                    action.as_str()
                ))
                .json(&LeaveActionRequest {
                    remarks: remarks.to_string(),
                }),
        );
        let response = self.send(request).await?;
        self.map_response(response).await
    }

    pub async fn delete_leave_request(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(
            self.http_client()
                .delete(format!("{}/leave-requests/{}", base_url, id)),
        );
        let response = self.send(request).await?;
        self.map_response(response).await
    }
}
