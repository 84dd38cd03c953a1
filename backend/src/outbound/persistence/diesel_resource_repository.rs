//! PostgreSQL-backed [`ResourceRepository`] bound to one connection.
//!
//! The repository borrows the connection of the surrounding unit of work, so
//! every statement it issues belongs to that unit's transaction. It never
//! opens or commits transactions itself.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::ResourceRepository;
use crate::domain::{
    CreateResourceRequest, Resource, ResourceError, ResourceId, UpdateResourceRequest,
};

use super::models::{NewResourceRow, ResourceChangeset, ResourceRow};
use super::schema::resources;

/// Name of the unique constraint guarding `resources.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "resources_email_key";

/// Diesel implementation of [`ResourceRepository`].
pub struct DieselResourceRepository<'c> {
    conn: &'c mut AsyncPgConnection,
}

impl<'c> DieselResourceRepository<'c> {
    pub fn new(conn: &'c mut AsyncPgConnection) -> Self {
        Self { conn }
    }
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = info.constraint_name(),
            "diesel operation failed"
        ),
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

/// Map a failed read into a storage error.
fn map_read_error(error: DieselError) -> ResourceError {
    log_diesel_error(&error);
    ResourceError::storage(error.to_string())
}

/// Map a failed insert or update of `email`.
///
/// Only a unique violation reported against [`EMAIL_UNIQUE_CONSTRAINT`]
/// counts as a duplicate; any other failure, including violations of other
/// constraints, is a storage error.
fn map_write_error(error: DieselError, email: &str) -> ResourceError {
    log_diesel_error(&error);
    match &error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if info.constraint_name() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
        {
            ResourceError::duplicate_key(email)
        }
        _ => ResourceError::storage(error.to_string()),
    }
}

#[async_trait]
impl ResourceRepository for DieselResourceRepository<'_> {
    async fn find_by_id(&mut self, id: ResourceId) -> Result<Resource, ResourceError> {
        resources::table
            .find(id.get())
            .select(ResourceRow::as_select())
            .first(&mut *self.conn)
            .await
            .optional()
            .map_err(map_read_error)?
            .map(Resource::from)
            .ok_or_else(|| ResourceError::not_found(id))
    }

    async fn find_all(&mut self) -> Result<Vec<Resource>, ResourceError> {
        let rows = resources::table
            .order(resources::id.asc())
            .select(ResourceRow::as_select())
            .load(&mut *self.conn)
            .await
            .map_err(map_read_error)?;
        Ok(rows.into_iter().map(Resource::from).collect())
    }

    async fn find_by_email(&mut self, email: &str) -> Result<Option<Resource>, ResourceError> {
        let row = resources::table
            .filter(resources::email.eq(email))
            .select(ResourceRow::as_select())
            .first(&mut *self.conn)
            .await
            .optional()
            .map_err(map_read_error)?;
        Ok(row.map(Resource::from))
    }

    async fn create(
        &mut self,
        request: &CreateResourceRequest,
    ) -> Result<Resource, ResourceError> {
        let row = diesel::insert_into(resources::table)
            .values(NewResourceRow::from(request))
            .returning(ResourceRow::as_returning())
            .get_result(&mut *self.conn)
            .await
            .map_err(|err| map_write_error(err, &request.email))?;
        Ok(row.into())
    }

    async fn update(
        &mut self,
        id: ResourceId,
        request: &UpdateResourceRequest,
    ) -> Result<Resource, ResourceError> {
        self.find_by_id(id).await?;
        let row = diesel::update(resources::table.find(id.get()))
            .set((
                ResourceChangeset::from(request),
                resources::updated_at.eq(diesel::dsl::now),
            ))
            .returning(ResourceRow::as_returning())
            .get_result(&mut *self.conn)
            .await
            .map_err(|err| map_write_error(err, &request.email))?;
        Ok(row.into())
    }

    async fn delete(&mut self, id: ResourceId) -> Result<(), ResourceError> {
        self.find_by_id(id).await?;
        diesel::delete(resources::table.find(id.get()))
            .execute(&mut *self.conn)
            .await
            .map_err(map_read_error)?;
        Ok(())
    }
}
