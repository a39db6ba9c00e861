//! Error types for deploy-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown network: {name}")]
    UnknownNetwork { name: String },
}
