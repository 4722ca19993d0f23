/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The targeted record no longer exists on the backend.
    #[error("repository.not_found")]
    NotFound,
    /// The backend rejected the write.
    #[error("repository.persistence")]
    Persistence,
    /// The backend could not be reached.
    #[error("repository.unreachable")]
    Unreachable,
    #[error("repository.database_error")]
    DatabaseError,
}
