//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every resource and health endpoint together with
//! the payload, response and error schemas. Swagger UI serves it at `/docs`
//! in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::resources::{DeletedResponse, ResourcePayload, ResourceResponse};
use crate::inbound::http::schemas::ErrorCodeSchema;

/// OpenAPI document for the roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "CRUD over resources with typed error responses, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::resources::list_resources,
        crate::inbound::http::resources::get_resource,
        crate::inbound::http::resources::create_resource,
        crate::inbound::http::resources::update_resource,
        crate::inbound::http::resources::delete_resource,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ResourcePayload,
        ResourceResponse,
        DeletedResponse,
        HealthResponse,
        ErrorBody,
        ErrorCodeSchema
    )),
    tags(
        (name = "resources", description = "Resource management"),
        (name = "health", description = "Health checks and probes")
    )
)]
pub struct ApiDoc;
