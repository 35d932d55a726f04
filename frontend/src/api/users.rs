use super::{
    client::ApiClient,
    types::{ApiError, AssignRoleRequest, UserResponse},
};

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(self.http_client().get(format!("{}/admin/users", base_url)));
        let response = self.send(request).await?;
        self.map_response(response).await
    }

    pub async fn assign_role(&self, user_id: &str, role: &str) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(
            self.http_client()
                .put(format!("{}/admin/users/{}/role", base_url, user_id))
                .json(&AssignRoleRequest {
                    role: role.to_string(),
                }),
        );
        let response = self.send(request).await?;
        self.map_response(response).await
    }
}
