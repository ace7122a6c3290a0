//! View rendering.
//!
//! Templates are compiled into the binary and registered once at startup.
//! View names may carry a leading `/`; it is ignored.

use minijinja::Environment;
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure to render a view.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown view '{0}'")]
    UnknownView(String),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Templating collaborator used by the shaper.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, model: &Map<String, Value>) -> Result<String, RenderError>;
}

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("perfil.html", include_str!("../../templates/perfil.html")),
    ("listar.html", include_str!("../../templates/listar.html")),
    ("details.html", include_str!("../../templates/details.html")),
    ("list.html", include_str!("../../templates/list.html")),
    ("params/index.html", include_str!("../../templates/params/index.html")),
    ("params/ver.html", include_str!("../../templates/params/ver.html")),
];

/// minijinja-backed views with HTML auto-escaping.
pub struct TemplateViews {
    env: Environment<'static>,
}

impl TemplateViews {
    /// Compile the templates shipped with the binary.
    pub fn embedded() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn template_name(view: &str) -> String {
        format!("{}.html", view.trim_start_matches('/'))
    }
}

impl ViewRenderer for TemplateViews {
    fn render(&self, view: &str, model: &Map<String, Value>) -> Result<String, RenderError> {
        let name = Self::template_name(view);
        let template = self
            .env
            .get_template(&name)
            .map_err(|_| RenderError::UnknownView(view.to_owned()))?;
        Ok(template.render(model)?)
    }
}
