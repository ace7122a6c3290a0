//! JSON parameter endpoints under `/api/params`.

use axum::{extract::State, response::Response};

use crate::http::{AppError, AppState};
use crate::models::{ParamDto, ParamMixDto};
use crate::params::{resolve, IntegerPolicy, ParameterSpec, QueryParams, Target};
use crate::shaper::SerializedBody;

const FOO_MESSAGE: ParameterSpec = ParameterSpec::with_default("message", "Hola que tal");

const BAR_TEXT: ParameterSpec = ParameterSpec::required("text");
const BAR_CODE: ParameterSpec = ParameterSpec::required("code");

const REQUEST_MESSAGE: ParameterSpec = ParameterSpec::optional("message");
const REQUEST_CODE: ParameterSpec = ParameterSpec::optional("code");
const REQUEST_CODE_FALLBACK: i32 = 10;

pub async fn foo(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let message = resolve(&params, &FOO_MESSAGE, Target::Text)?;

    let body = SerializedBody::record(ParamDto {
        message: message.typed_value.to_string(),
    })?;
    state.shaper().render(body)
}

pub async fn bar(State(state): State<AppState>, params: QueryParams) -> Result<Response, AppError> {
    let text = resolve(&params, &BAR_TEXT, Target::Text)?;
    let code = resolve(&params, &BAR_CODE, Target::Integer(IntegerPolicy::Strict))?;

    let body = SerializedBody::record(ParamMixDto {
        message: text.as_text().map(str::to_owned),
        code: code.as_integer(),
    })?;
    state.shaper().render(body)
}

pub async fn request(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Response, AppError> {
    let message = resolve(&params, &REQUEST_MESSAGE, Target::Text)?;
    let code = resolve(
        &params,
        &REQUEST_CODE,
        Target::Integer(IntegerPolicy::Fallback(REQUEST_CODE_FALLBACK)),
    )?;

    let body = SerializedBody::from_resolved(&[("message", &message), ("code", &code)]);
    state.shaper().render(body)
}
