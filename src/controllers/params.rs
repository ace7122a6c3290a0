//! Parameter demo pages under `/params`.
//!
//! Every handler renders `params/ver` with a single `resultado` attribute.

use axum::{extract::State, response::Response};

use crate::http::{AppError, AppState};
use crate::params::{resolve, IntegerPolicy, ParameterSpec, QueryParams, Target};

const TEXTO: ParameterSpec = ParameterSpec::with_default("texto", "Sin parámetros...");
const SALUDO: ParameterSpec = ParameterSpec::with_default("saludo", "Hola hola...");
const NUMERO: ParameterSpec = ParameterSpec::required("numero");

// Read straight off the request: no defaults, unparsable numbers become 0.
const RAW_SALUDO: ParameterSpec = ParameterSpec::optional("saludo");
const RAW_NUMERO: ParameterSpec = ParameterSpec::optional("numero");

const RESULT_VIEW: &str = "params/ver";

fn greeting(saludo: impl std::fmt::Display, numero: impl std::fmt::Display) -> String {
    format!("Saludo: {saludo}, con número {numero}")
}

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let shaper = state.shaper();
    shaper.render(shaper.view("/params/index", &[])?)
}

pub async fn string(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let texto = resolve(&params, &TEXTO, Target::Text)?;

    let shaper = state.shaper();
    let model = shaper
        .view("/params/ver", &[])?
        .attribute("resultado", format!("Texto recibido: {}", texto.typed_value))?;
    shaper.render(model)
}

pub async fn mix_params(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let saludo = resolve(&params, &SALUDO, Target::Text)?;
    let numero = resolve(&params, &NUMERO, Target::Integer(IntegerPolicy::Strict))?;

    let shaper = state.shaper();
    let model = shaper
        .view(RESULT_VIEW, &[])?
        .attribute("resultado", greeting(&saludo.typed_value, &numero.typed_value))?;
    shaper.render(model)
}

pub async fn mix_params_request(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let saludo = resolve(&params, &RAW_SALUDO, Target::Text)?;
    let numero = resolve(&params, &RAW_NUMERO, Target::Integer(IntegerPolicy::Fallback(0)))?;

    let shaper = state.shaper();
    let model = shaper
        .view(RESULT_VIEW, &[])?
        .attribute("resultado", greeting(&saludo.typed_value, &numero.typed_value))?;
    shaper.render(model)
}
