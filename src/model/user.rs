use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}
