/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::user::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Paginated envelope returned by the list users endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ListUsersResponse {
    /// Users on this page
    pub data: Vec<User>,
    /// Server message
    pub message: String,
    /// Current page number
    pub page: i64,
    /// Total number of pages
    pub pages: i64,
    /// Page size used by the server
    pub size: i64,
    /// Status code echoed in the body
    pub status: i64,
    /// Total number of users matching the query
    pub total: i64,
}

impl ListUsersResponse {
    /// Users on this page
    pub fn users(&self) -> &[User] {
        &self.data
    }

    /// Consumes the envelope, keeping only the users
    pub fn into_users(self) -> Vec<User> {
        self.data
    }

    /// Whether a page after `requested_page` exists
    ///
    /// Compares against the page the caller asked for, not the `page` echoed
    /// back, so a server that always reports the same page cannot keep a
    /// paging loop alive.
    pub fn has_page_after(&self, requested_page: u32) -> bool {
        i64::from(requested_page) < self.pages
    }
}

/// Roles that can be assigned to users
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ListRolesResponse {
    /// Role names
    pub roles: Vec<String>,
}

impl ListRolesResponse {
    /// Whether `role` is one of the listed roles
    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
