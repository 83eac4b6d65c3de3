//! GraphQL operations of the users screen.
//!
//! Documents and payload shapes follow the backend schema: a `users`
//! collection query, an `updateUserProfile` mutation, and a `deleteUser`
//! mutation. Note that `deleteUser` is keyed by email, not id; that is the
//! backend's contract and the screen follows it.

use serde::{Deserialize, Serialize};

/// One user account as the backend returns it.
///
/// `password` arrives and is displayed in cleartext. That is the observed
/// backend contract, not a choice made here; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub password: String,
}

/// `query getUsers` — fetch the full user collection.
pub const GET_USERS_QUERY: &str = "\
query getUsers {
  users {
    id
    email
    password
  }
}";

/// `mutation editUser` — update one user's profile.
pub const EDIT_USER_MUTATION: &str = "\
mutation editUser($userId: ID!, $email: String!, $password: String!) {
  updateUserProfile(input: { userId: $userId, email: $email, password: $password }) {
    user {
      id
      email
      password
    }
  }
}";

/// `mutation deleteAdmin` — delete one user, keyed by email.
pub const DELETE_USER_MUTATION: &str = "\
mutation deleteAdmin($email: String!) {
  deleteUser(input: { email: $email }) {
    success
    error
  }
}";

/// Variables for [`EDIT_USER_MUTATION`].
pub fn edit_user_variables(user_id: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "email": email,
        "password": password,
    })
}

/// Variables for [`DELETE_USER_MUTATION`].
pub fn delete_user_variables(email: &str) -> serde_json::Value {
    serde_json::json!({ "email": email })
}

/// `data` payload of the users query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersData {
    pub users: Vec<UserRecord>,
}

/// `data` payload of the edit mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditUserData {
    #[serde(rename = "updateUserProfile")]
    pub update_user_profile: EditUserPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditUserPayload {
    pub user: UserRecord,
}

/// `data` payload of the delete mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserData {
    #[serde(rename = "deleteUser")]
    pub delete_user: DeleteUserPayload,
}

/// The delete result: a success flag plus an optional error string.
///
/// The error string is never shown to the user (observed behavior, preserved);
/// callers log it instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserPayload {
    pub success: bool,
    pub error: Option<String>,
}
