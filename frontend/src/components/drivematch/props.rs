//! Properties of the `DriveMatchComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DriveMatchProps {
    /// Base endpoint of the DriveMatch API.
    ///
    /// - `Some(endpoint)`: used as-is, the launcher's `/app-config` is not
    ///   requested.
    /// - `None` (the default): the endpoint is taken from `/app-config` on
    ///   first render, falling back to the compiled-in default.
    #[prop_or_default]
    pub api_endpoint: Option<String>,
}
