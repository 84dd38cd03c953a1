//! Resource CRUD handlers.
//!
//! ```text
//! GET    /resources
//! GET    /resources/{id}
//! POST   /resources        {"name":"Alice","email":"alice@example.com","age":30}
//! PUT    /resources/{id}   {"name":"Alice","email":"alice@example.com","age":31}
//! DELETE /resources/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreateResourceRequest, Resource, UpdateResourceRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_resource_id;

/// Request body for creating or replacing a resource.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePayload {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = 30)]
    pub age: i32,
}

impl From<ResourcePayload> for CreateResourceRequest {
    fn from(payload: ResourcePayload) -> Self {
        Self::new(payload.name, payload.email, payload.age)
    }
}

impl From<ResourcePayload> for UpdateResourceRequest {
    fn from(payload: ResourcePayload) -> Self {
        Self::new(payload.name, payload.email, payload.age)
    }
}

/// Resource as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last write.
    pub updated_at: String,
}

impl From<Resource> for ResourceResponse {
    fn from(value: Resource) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            email: value.email,
            age: value.age,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Confirmation body for `DELETE /resources/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "Resource 1 deleted")]
    pub message: String,
}

/// List every resource ordered by id.
#[utoipa::path(
    get,
    path = "/resources",
    responses(
        (status = 200, description = "All resources", body = [ResourceResponse]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["resources"],
    operation_id = "listResources"
)]
#[get("/resources")]
pub async fn list_resources(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ResourceResponse>>> {
    let resources = state.resources_query.list().await?;
    Ok(web::Json(
        resources.into_iter().map(ResourceResponse::from).collect(),
    ))
}

/// Fetch one resource.
#[utoipa::path(
    get,
    path = "/resources/{id}",
    params(("id" = i64, Path, description = "Resource identifier")),
    responses(
        (status = 200, description = "The resource", body = ResourceResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorBody),
        (status = 404, description = "No such resource", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["resources"],
    operation_id = "getResource"
)]
#[get("/resources/{id}")]
pub async fn get_resource(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ResourceResponse>> {
    let id = parse_resource_id(&path)?;
    let resource = state.resources_query.get(id).await?;
    Ok(web::Json(resource.into()))
}

/// Create a resource.
#[utoipa::path(
    post,
    path = "/resources",
    request_body = ResourcePayload,
    responses(
        (status = 201, description = "Created resource", body = ResourceResponse),
        (status = 400, description = "Invalid field or body", body = ErrorBody),
        (status = 409, description = "Email already in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["resources"],
    operation_id = "createResource"
)]
#[post("/resources")]
pub async fn create_resource(
    state: web::Data<HttpState>,
    payload: web::Json<ResourcePayload>,
) -> ApiResult<HttpResponse> {
    let created = state
        .resources
        .create(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ResourceResponse::from(created)))
}

/// Replace the fields of a resource.
#[utoipa::path(
    put,
    path = "/resources/{id}",
    params(("id" = i64, Path, description = "Resource identifier")),
    request_body = ResourcePayload,
    responses(
        (status = 200, description = "Updated resource", body = ResourceResponse),
        (status = 400, description = "Invalid field, body or identifier", body = ErrorBody),
        (status = 404, description = "No such resource", body = ErrorBody),
        (status = 409, description = "Email already in use", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["resources"],
    operation_id = "updateResource"
)]
#[put("/resources/{id}")]
pub async fn update_resource(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ResourcePayload>,
) -> ApiResult<web::Json<ResourceResponse>> {
    let id = parse_resource_id(&path)?;
    let updated = state
        .resources
        .update(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(updated.into()))
}

/// Delete a resource.
#[utoipa::path(
    delete,
    path = "/resources/{id}",
    params(("id" = i64, Path, description = "Resource identifier")),
    responses(
        (status = 200, description = "Resource deleted", body = DeletedResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorBody),
        (status = 404, description = "No such resource", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["resources"],
    operation_id = "deleteResource"
)]
#[delete("/resources/{id}")]
pub async fn delete_resource(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = parse_resource_id(&path)?;
    state.resources.delete(id).await?;
    Ok(web::Json(DeletedResponse {
        message: format!("Resource {id} deleted"),
    }))
}
