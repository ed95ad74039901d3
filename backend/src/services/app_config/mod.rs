//! # Runtime Configuration Endpoint
//!
//! The frontend is compiled once but may talk to DriveMatch APIs on different
//! hosts. Instead of baking the endpoint into the wasm bundle, the launcher
//! serves it at `GET /app-config` and the frontend asks for it on startup.

mod get;

use actix_web::web::{get, resource};
use actix_web::Resource;
use common::model::config::APP_CONFIG_PATH;

/// Configures the `/app-config` resource.
///
/// *   **`GET /app-config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `AppConfig` registered as app data as
///       JSON, e.g. `{"api_endpoint": "http://127.0.0.1:8000/api/v2/"}`.
pub fn configure_routes() -> Resource {
    resource(APP_CONFIG_PATH).route(get().to(get::process))
}
