use thiserror::Error;

/// Structural errors raised while building or querying a circuit. These
/// indicate a programming error in circuit construction and are raised at
/// the offending call, never deferred.
#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("component {component} has no terminal '{terminal}' (has: {})", .available.join(", "))]
    UnknownTerminal {
        component: String,
        terminal: String,
        available: Vec<String>,
    },

    #[error("node id of {component}.{terminal} read before resolve_nodes ran")]
    Unresolved { component: String, terminal: String },
}

pub type Result<T> = std::result::Result<T, CircuitError>;
