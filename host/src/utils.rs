#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("Shell setup failed: {0}")]
    Shell(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("figment: {0}")]
    Figment(#[from] figment::Error),
}

pub type HostResult<T> = Result<T, HostError>;
