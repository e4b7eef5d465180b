use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);
