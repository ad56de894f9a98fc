use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A user account as the Superclouds API reports it
///
/// Fields the server leaves out decode as empty strings, so partial records
/// such as the `{id, email}` returned on creation still decode.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct User {
    /// Unique identifier of the user
    pub id: String,
    /// Email address, also the login
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Role name, one of those returned by the roles endpoint
    pub role: String,
}

impl User {
    /// Full name, or the email when no name is set
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}
