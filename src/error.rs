pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("queue error: {0}")]
    Queue(String),

    #[error("invalid task: {0}")]
    InvalidTask(String),

    #[error("task failed: {0}")]
    TaskFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn queue<S: Into<String>>(msg: S) -> Self {
        Error::Queue(msg.into())
    }

    pub fn invalid_task<S: Into<String>>(msg: S) -> Self {
        Error::InvalidTask(msg.into())
    }

    pub fn task_failed<S: Into<String>>(msg: S) -> Self {
        Error::TaskFailed(msg.into())
    }
}
