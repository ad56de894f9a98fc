use crate::error::AppError;
use crate::model::requests::{
    ChangePasswordRequest, CreateUserRequest, DeleteUserRequest, ListUsersRequest,
    UpdateUserRequest, UpdateUserRoleRequest,
};
use crate::model::responses::{ListRolesResponse, ListUsersResponse};
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for the user management service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists one page of users
    ///
    /// # Arguments
    /// * `input` - Page size, page number and search term; defaults are not sent
    ///
    /// # Returns
    /// * The paginated envelope; paging through further results is up to the caller
    async fn list_users(&self, input: &ListUsersRequest) -> Result<ListUsersResponse, AppError>;

    /// Creates (invites) a user within the organization
    async fn create_user(&self, input: &CreateUserRequest) -> Result<User, AppError>;

    /// Removes a user from the organization
    async fn delete_user(&self, input: &DeleteUserRequest) -> Result<(), AppError>;

    /// Updates the authenticated user's profile
    async fn update_user(&self, input: &UpdateUserRequest) -> Result<User, AppError>;

    /// Gets the authenticated user
    async fn get_user(&self) -> Result<User, AppError>;

    /// Lists the roles that can be assigned
    async fn list_roles(&self) -> Result<ListRolesResponse, AppError>;

    /// Assigns a role to a user
    async fn update_user_role(&self, input: &UpdateUserRoleRequest) -> Result<(), AppError>;

    /// Changes the authenticated user's password
    async fn change_password(&self, input: &ChangePasswordRequest) -> Result<(), AppError>;
}
