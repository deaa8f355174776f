use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequestModel {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl UserModel {
    pub fn new(id: i64, req: CreateUserRequestModel) -> Self {
        Self { id, name: req.name, email: req.email }
    }
}
