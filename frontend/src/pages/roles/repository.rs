use crate::api::{ApiClient, ApiError, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct RolesRepository {
    client: Rc<ApiClient>,
}

impl RolesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        self.client.get_users().await
    }

    pub async fn assign_role(&self, user_id: &str, role: &str) -> Result<(), ApiError> {
        self.client.assign_role(user_id, role).await.map(|_| ())
    }
}
