use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct UserListResponse {
    pub users: Vec<UserItem>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct UserItem {
    /// vendor numeric user id
    pub id: u64,
    /// display name shown in the form view
    pub name: String,
}
