use thiserror::Error;

/// Lookup errors against a parsed dataset. Raised at query time; parse
/// problems themselves are recorded on the dataset instead.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("vector not found: {name} (available: {})", .available.join(", "))]
    VectorNotFound { name: String, available: Vec<String> },
}

/// Errors from pin-addressed result queries.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("pin {component}.{terminal} has no resolved node")]
    PinNotConnected { component: String, terminal: String },

    #[error("no current vector for {name} (available: {})", .available.join(", "))]
    CurrentNotAvailable { name: String, available: Vec<String> },

    #[error(transparent)]
    Circuit(#[from] netbind_core::CircuitError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
