//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with embedded audit history.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Priority level.
        #[max_length = 50]
        priority -> Varchar,
        /// Due date.
        due_date -> Timestamptz,
        /// Deduplicated tags.
        tags -> Array<Text>,
        /// Append-only audit history as a JSON array.
        history -> Jsonb,
        /// Soft-delete marker; null means active.
        deleted_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
