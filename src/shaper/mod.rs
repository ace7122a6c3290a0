//! Response shaping.
//!
//! # Data Flow
//! ```text
//! ResolvedParameter(s) + population hooks + titles
//!     → TemplateModel  → views.rs (ViewRenderer) → text/html
//!     → SerializedBody → application/json
//! ```
//!
//! # Design Decisions
//! - Payload kind is an explicit enum, not inferred from handler return types
//! - Hooks are plain functions merged before handler attributes, so a handler
//!   attribute with the same key wins
//! - The shaper borrows process-wide config; it owns no state

pub mod views;

use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::TitleConfig;
use crate::http::response::AppError;
use crate::models::User;
use crate::params::ResolvedParameter;
use self::views::ViewRenderer;

/// Named attributes handed to a view.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateModel {
    view: String,
    attributes: Map<String, Value>,
}

impl TemplateModel {
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            attributes: Map::new(),
        }
    }

    /// Set an attribute, replacing any earlier value under `key`.
    pub fn attribute(mut self, key: &str, value: impl Serialize) -> Result<Self, AppError> {
        self.attributes.insert(key.to_owned(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Merge the collections produced by `hooks`.
    pub fn merge(mut self, hooks: &[PopulationHook]) -> Result<Self, AppError> {
        for hook in hooks {
            self = self.attribute(hook.attribute, (hook.populate)())?;
        }
        Ok(self)
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

/// Data emitted directly as the JSON response body.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedBody(pub Value);

impl SerializedBody {
    /// Serialize any record or collection.
    pub fn record(record: impl Serialize) -> Result<Self, AppError> {
        Ok(Self(serde_json::to_value(record)?))
    }

    /// Build a flat object from resolved parameters, keyed by the given names.
    pub fn from_resolved(fields: &[(&str, &ResolvedParameter)]) -> Self {
        let map = fields
            .iter()
            .map(|(key, param)| {
                let value = match param.as_integer() {
                    Some(n) => Value::from(n),
                    None => param.as_text().map_or(Value::Null, Value::from),
                };
                ((*key).to_owned(), value)
            })
            .collect();
        Self(Value::Object(map))
    }
}

/// What a handler produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    Template(TemplateModel),
    Serialized(SerializedBody),
}

impl From<TemplateModel> for ResponsePayload {
    fn from(model: TemplateModel) -> Self {
        ResponsePayload::Template(model)
    }
}

impl From<SerializedBody> for ResponsePayload {
    fn from(body: SerializedBody) -> Self {
        ResponsePayload::Serialized(body)
    }
}

/// Canned collection merged into every model of a controller.
#[derive(Debug, Clone, Copy)]
pub struct PopulationHook {
    pub attribute: &'static str,
    pub populate: fn() -> Vec<User>,
}

impl PopulationHook {
    pub const fn new(attribute: &'static str, populate: fn() -> Vec<User>) -> Self {
        Self { attribute, populate }
    }
}

/// Turns payloads into HTTP responses.
pub struct ResponseShaper<'a> {
    titles: &'a TitleConfig,
    views: &'a dyn ViewRenderer,
}

impl<'a> ResponseShaper<'a> {
    pub fn new(titles: &'a TitleConfig, views: &'a dyn ViewRenderer) -> Self {
        Self { titles, views }
    }

    pub fn titles(&self) -> &'a TitleConfig {
        self.titles
    }

    /// Start a model for `view` with the controller's hooks already merged.
    pub fn view(&self, view: &str, hooks: &[PopulationHook]) -> Result<TemplateModel, AppError> {
        TemplateModel::new(view).merge(hooks)
    }

    pub fn render(&self, payload: impl Into<ResponsePayload>) -> Result<Response, AppError> {
        match payload.into() {
            ResponsePayload::Template(model) => {
                let html = self.views.render(model.view(), model.attributes())?;
                Ok(Html(html).into_response())
            }
            ResponsePayload::Serialized(SerializedBody(value)) => Ok(Json(value).into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TypedValue;
    use crate::shaper::views::RenderError;
    use axum::http::{header, StatusCode};
    use serde_json::json;

    struct EchoViews;

    impl ViewRenderer for EchoViews {
        fn render(&self, view: &str, model: &Map<String, Value>) -> Result<String, RenderError> {
            Ok(format!("{view}:{}", Value::Object(model.clone())))
        }
    }

    fn people() -> Vec<User> {
        vec![User::new("Pepa", "Gonzalez")]
    }

    const HOOKS: &[PopulationHook] = &[PopulationHook::new("users", people)];

    #[test]
    fn test_hooks_merged_before_handler_attributes() {
        let titles = TitleConfig::default();
        let shaper = ResponseShaper::new(&titles, &EchoViews);
        let model = shaper
            .view("list", HOOKS)
            .unwrap()
            .attribute("title", "Listado")
            .unwrap();

        assert_eq!(model.view(), "list");
        assert_eq!(model.get("title"), Some(&json!("Listado")));
        assert_eq!(model.get("users").unwrap()[0]["name"], json!("Pepa"));

        let overridden = model.attribute("users", Vec::<User>::new()).unwrap();
        assert_eq!(overridden.get("users"), Some(&json!([])));
    }

    #[test]
    fn test_from_resolved_keeps_types() {
        let code = ResolvedParameter {
            name: "code",
            raw_value: Some("xyz".into()),
            typed_value: TypedValue::Integer(10),
            used_default: true,
        };
        let message = ResolvedParameter {
            name: "message",
            raw_value: None,
            typed_value: TypedValue::Null,
            used_default: false,
        };
        let body = SerializedBody::from_resolved(&[("code", &code), ("message", &message)]);
        assert_eq!(body.0, json!({ "code": 10, "message": null }));
    }

    #[test]
    fn test_render_dispatches_on_payload_kind() {
        let titles = TitleConfig::default();
        let shaper = ResponseShaper::new(&titles, &EchoViews);

        let html = shaper.render(TemplateModel::new("index")).unwrap();
        assert_eq!(html.status(), StatusCode::OK);
        assert!(html.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = shaper
            .render(SerializedBody::record(json!({ "message": "Hi" })).unwrap())
            .unwrap();
        assert_eq!(body.headers()[header::CONTENT_TYPE], "application/json");
    }
}
