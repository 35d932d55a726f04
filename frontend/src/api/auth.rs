use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(&request),
            )
            .await?;
        let login_response: LoginResponse = self.map_response(response).await?;
        Self::persist_session(&login_response);
        Ok(login_response)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(
            self.http_client()
                .post(format!("{}/auth/logout", base_url)),
        );
        let response = self.send(request).await?;
        let status = response.status();
        Self::clear_session();
        if status.is_success() {
            Ok(())
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|_| ApiError::unknown("Logout failed"))?;
            Err(error)
        }
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let request = self.authorized(self.http_client().get(format!("{}/auth/me", base_url)));
        let response = self.send(request).await?;
        self.map_response(response).await
    }
}
