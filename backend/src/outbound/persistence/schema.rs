//! Diesel table definitions.
//!
//! Must match `backend/migrations`. Regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Managed resources. `email` is guarded by the `resources_email_key`
    /// unique constraint.
    resources (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
        age -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
