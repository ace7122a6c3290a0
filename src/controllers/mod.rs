//! Route table.
//!
//! | Prefix         | Module         | Output     |
//! |----------------|----------------|------------|
//! | `/`, `/app`    | `home`         | HTML views |
//! | `/params`      | `params`       | HTML views |
//! | `/details`     | `users`        | HTML views |
//! | `/api`         | `users`        | JSON       |
//! | `/api/params`  | `api_params`   | JSON       |
//! | `/api/products`| `products`     | JSON       |

pub mod api_params;
pub mod home;
pub mod params;
pub mod products;
pub mod users;

use axum::{routing::get, Router};

use crate::http::server::AppState;

/// All routes of the service. Every route is GET-only.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home and /app pages
        .route("/", get(home::home))
        .route("/app", get(home::index))
        .route("/app/", get(home::index))
        .route("/app/index", get(home::index))
        .route("/app/home", get(home::index))
        .route("/app/perfil", get(home::perfil))
        .route("/app/listar", get(home::listar))
        // Parameter demo pages
        .route("/params/", get(params::index))
        .route("/params/string", get(params::string))
        .route("/params/mix-params", get(params::mix_params))
        .route("/params/mix-params-request", get(params::mix_params_request))
        // User pages and API
        .route("/details", get(users::details))
        .route("/list", get(users::list))
        .route("/api/details", get(users::api_details))
        .route("/api/list", get(users::api_list))
        .route("/api/details-map", get(users::api_details_map))
        // Parameter API
        .route("/api/params/foo", get(api_params::foo))
        .route("/api/params/bar", get(api_params::bar))
        .route("/api/params/request", get(api_params::request))
        // Catalog
        .route("/api/products", get(products::list))
        .route("/api/products/{id}", get(products::by_id))
}
