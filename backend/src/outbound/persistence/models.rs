//! Diesel row structs for the `resources` table.
//!
//! These stay inside the persistence layer; repositories convert them to
//! domain values before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{CreateResourceRequest, Resource, ResourceId, UpdateResourceRequest};

use super::schema::resources;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = resources)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ResourceRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResourceRow> for Resource {
    fn from(row: ResourceRow) -> Self {
        Self {
            id: ResourceId::new(row.id),
            name: row.name,
            email: row.email,
            age: row.age,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable values; `id` and timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = resources)]
pub(crate) struct NewResourceRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
}

impl<'a> From<&'a CreateResourceRequest> for NewResourceRow<'a> {
    fn from(request: &'a CreateResourceRequest) -> Self {
        Self {
            name: &request.name,
            email: &request.email,
            age: request.age,
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = resources)]
pub(crate) struct ResourceChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
}

impl<'a> From<&'a UpdateResourceRequest> for ResourceChangeset<'a> {
    fn from(request: &'a UpdateResourceRequest) -> Self {
        Self {
            name: &request.name,
            email: &request.email,
            age: request.age,
        }
    }
}
