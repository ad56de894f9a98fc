/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the users endpoints of the Superclouds API
//!
//! # Example
//! ```ignore
//! use superclouds::prelude::*;
//!
//! let http_client = Arc::new(HttpClient::from_env()?);
//! let users = UsersClient::new(http_client);
//!
//! let page = users
//!     .list_users(&ListUsersRequest::new().with_size(10).with_page(1))
//!     .await?;
//! ```

use crate::application::interfaces::user::UserService;
use crate::constants::{CHANGE_PASSWORD_PATH, ROLE_PATH, ROLES_PATH, USER_PATH, USERS_PATH};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    ChangePasswordRequest, CreateUserRequest, DeleteUserRequest, ListUsersRequest,
    UpdateUserRequest, UpdateUserRoleRequest,
};
use crate::model::responses::{ListRolesResponse, ListUsersResponse};
use crate::presentation::user::User;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Users resource client
///
/// Borrows nothing per call: every request goes through the shared
/// [`HttpClient`], so cloning a `UsersClient` or building several from the
/// same transport is cheap.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http_client: Arc<HttpClient>,
}

impl UsersClient {
    /// Creates a users client on top of an existing transport
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Creates a users client with a transport configured from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(Arc::new(HttpClient::from_env()?)))
    }

    /// Gets the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

impl From<HttpClient> for UsersClient {
    fn from(http_client: HttpClient) -> Self {
        Self::new(Arc::new(http_client))
    }
}

#[async_trait]
impl UserService for UsersClient {
    async fn list_users(&self, input: &ListUsersRequest) -> Result<ListUsersResponse, AppError> {
        info!("Listing users: {}", input);
        let result: ListUsersResponse = self
            .http_client
            .get(USERS_PATH, &input.query_params())
            .await?;
        debug!(
            "Users obtained: {} on page {}/{} ({} total)",
            result.data.len(),
            result.page,
            result.pages,
            result.total
        );
        Ok(result)
    }

    async fn create_user(&self, input: &CreateUserRequest) -> Result<User, AppError> {
        info!("Creating user: {}", input.email);
        let user: User = self.http_client.post(USERS_PATH, input).await?;
        debug!("User created with id {}", user.id);
        Ok(user)
    }

    async fn delete_user(&self, input: &DeleteUserRequest) -> Result<(), AppError> {
        info!("Deleting user: {}", input.email);
        self.http_client
            .request_status(
                Method::DELETE,
                USERS_PATH,
                &input.query_params(),
                None::<&()>,
                "delete user",
            )
            .await
    }

    async fn update_user(&self, input: &UpdateUserRequest) -> Result<User, AppError> {
        info!("Updating current user");
        let user: User = self.http_client.patch(USER_PATH, input).await?;
        debug!("User updated: {}", user.id);
        Ok(user)
    }

    async fn get_user(&self) -> Result<User, AppError> {
        info!("Getting current user");
        let user: User = self.http_client.get(USER_PATH, &[]).await?;
        debug!("Current user: {}", user.email);
        Ok(user)
    }

    async fn list_roles(&self) -> Result<ListRolesResponse, AppError> {
        info!("Listing roles");
        let roles: ListRolesResponse = self.http_client.get(ROLES_PATH, &[]).await?;
        debug!("Roles obtained: {}", roles.roles.len());
        Ok(roles)
    }

    async fn update_user_role(&self, input: &UpdateUserRoleRequest) -> Result<(), AppError> {
        info!("Setting role {} for {}", input.role, input.email);
        self.http_client
            .request_status(
                Method::PATCH,
                ROLE_PATH,
                &[],
                Some(input),
                "update user role",
            )
            .await
    }

    async fn change_password(&self, input: &ChangePasswordRequest) -> Result<(), AppError> {
        info!("Changing password for current user");
        self.http_client
            .request_status(
                Method::PATCH,
                CHANGE_PASSWORD_PATH,
                &[],
                Some(input),
                "change password",
            )
            .await
    }
}
