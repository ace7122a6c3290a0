//! Landing pages under `/app`.

use axum::{extract::State, response::Response};

use crate::http::{AppError, AppState};
use crate::models::User;
use crate::shaper::PopulationHook;

const HOOKS: &[PopulationHook] = &[PopulationHook::new("usuarios", populate_users)];

/// Users listed on every `/app` page.
pub fn populate_users() -> Vec<User> {
    vec![
        User::new("Tino", "Reyna").with_email("tino@mail.com"),
        User::new("Gabriela", "Lorentzen").with_email("gaby@mail.com"),
        User::new("Dante", "Lorentzen").with_email("dante.com"),
    ]
}

/// `/` forwards to the index page.
pub async fn home(state: State<AppState>) -> Result<Response, AppError> {
    index(state).await
}

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let shaper = state.shaper();
    let model = shaper
        .view("index", HOOKS)?
        .attribute("titulo", &shaper.titles().index)?;
    shaper.render(model)
}

pub async fn perfil(State(state): State<AppState>) -> Result<Response, AppError> {
    let shaper = state.shaper();
    let usuario = User::new("Tino", "Reyna").with_email("tino@mail.com");
    let titulo = format!("{}{}", shaper.titles().profile, usuario.name);

    let model = shaper
        .view("perfil", HOOKS)?
        .attribute("usuario", &usuario)?
        .attribute("titulo", titulo)?;
    shaper.render(model)
}

pub async fn listar(State(state): State<AppState>) -> Result<Response, AppError> {
    let shaper = state.shaper();
    let model = shaper
        .view("listar", HOOKS)?
        .attribute("titulo", &shaper.titles().listing)?;
    shaper.render(model)
}
