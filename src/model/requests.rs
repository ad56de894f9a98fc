/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::model::http::QueryParams;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters for listing users
///
/// Zero sizes and pages and an empty search term are left out of the query so
/// the server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
pub struct ListUsersRequest {
    /// Page size (0 = server default)
    pub size: u32,
    /// Page number (0 = server default)
    pub page: u32,
    /// Free-text search term (empty = no filter)
    #[serde(rename = "s")]
    pub search_term: String,
}

impl ListUsersRequest {
    /// Create parameters that fetch the first page with server defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the search term
    pub fn with_search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    /// Query pairs for the request, skipping values left at their default
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.size > 0 {
            params.push(("size", self.size.to_string()));
        }
        if self.page > 0 {
            params.push(("page", self.page.to_string()));
        }
        if !self.search_term.is_empty() {
            params.push(("s", self.search_term.clone()));
        }
        params
    }
}

/// Model for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Email of the user to invite
    pub email: String,
}

impl CreateUserRequest {
    /// Creates the request for `email`
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Model for deleting a user, sent as the `email` query parameter
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    /// Email of the user to remove
    pub email: String,
}

impl DeleteUserRequest {
    /// Creates the request for `email`
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Query pairs identifying the user
    pub fn query_params(&self) -> QueryParams {
        vec![("email", self.email.clone())]
    }
}

/// Model for updating the authenticated user's profile
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New contact number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl UpdateUserRequest {
    /// Creates an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the contact
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }
}

/// Model for assigning a role to a user
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct UpdateUserRoleRequest {
    /// Email of the user
    pub email: String,
    /// Role name, e.g. "MODIFY"
    pub role: String,
}

impl UpdateUserRoleRequest {
    /// Creates the request
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Model for changing the authenticated user's password
///
/// `new_password` and `confirm_password` are sent as given; whether they
/// match is for the server to decide.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Password currently in use
    pub current_password: String,
    /// Password to switch to
    #[serde(rename = "password")]
    pub new_password: String,
    /// Confirmation of the new password
    pub confirm_password: String,
}

impl ChangePasswordRequest {
    /// Creates the request
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("current_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}
