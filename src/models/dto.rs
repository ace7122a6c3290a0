//! Response records of the JSON API.

use serde::Serialize;

use crate::models::User;

/// Body of `/api/params/foo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDto {
    pub message: String,
}

/// Body of `/api/params/bar` and `/api/params/request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamMixDto {
    pub message: Option<String>,
    pub code: Option<i32>,
}

/// Body of `/api/details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub title: String,
    pub user: User,
}
