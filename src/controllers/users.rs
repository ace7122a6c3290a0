//! User pages and the user JSON API.

use axum::{extract::State, response::Response};
use serde_json::json;

use crate::http::{AppError, AppState};
use crate::models::{User, UserDto};
use crate::shaper::{PopulationHook, SerializedBody};

const DETAILS_TITLE: &str = "Hola Mundo Spring Boot";
const LIST_TITLE: &str = "Listado de usuarios!";

const HOOKS: &[PopulationHook] = &[PopulationHook::new("users", populate_users)];

/// Users merged into the `details` and `list` views.
pub fn populate_users() -> Vec<User> {
    vec![
        User::new("Pepa", "Gonzalez"),
        User::new("Lalo", "Perez").with_email("lalo@correo.com"),
        User::new("Juanita", "Roe").with_email("juana@correo.com"),
        User::new("Andres", "Doe"),
    ]
}

pub async fn details(State(state): State<AppState>) -> Result<Response, AppError> {
    let user = User::new("Andres", "Guzman").with_email("andres@correo.com");

    let shaper = state.shaper();
    let model = shaper
        .view("details", HOOKS)?
        .attribute("title", DETAILS_TITLE)?
        .attribute("user", &user)?;
    shaper.render(model)
}

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let shaper = state.shaper();
    let model = shaper.view("list", HOOKS)?.attribute("title", LIST_TITLE)?;
    shaper.render(model)
}

pub async fn api_details(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = SerializedBody::record(UserDto {
        title: DETAILS_TITLE.to_string(),
        user: User::new("Andres", "Guzman"),
    })?;
    state.shaper().render(body)
}

pub async fn api_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let users = vec![
        User::new("Andres", "Guzman"),
        User::new("Pepe", "Doe"),
        User::new("Jhon", "Doe"),
    ];
    state.shaper().render(SerializedBody::record(users)?)
}

pub async fn api_details_map(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = SerializedBody(json!({
        "title": DETAILS_TITLE,
        "user": User::new("Andres", "Guzman"),
    }));
    state.shaper().render(body)
}
