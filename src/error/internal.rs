use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A relation was requested that the resource never declared.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned to client.
    #[error("Resource '{resource}' has no relation named '{relation}'")]
    UnknownRelation {
        resource: &'static str,
        relation: String,
    },

    /// A column expected to hold a value was not set on an active model.
    #[error("Column '{column}' of resource '{resource}' has no value")]
    MissingColumnValue {
        resource: &'static str,
        column: &'static str,
    },
}
