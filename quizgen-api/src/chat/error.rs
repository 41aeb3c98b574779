use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("OPENAI_API_KEY is not configured on the server")]
    MissingCredential,

    #[error("request to chat service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode chat service response: {0}")]
    Decode(String),

    #[error("chat service returned no content")]
    EmptyResponse,
}

impl ChatError {
    /// Stable name of the failure, used as the prefix of client-facing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::MissingCredential => "MissingCredential",
            ChatError::Transport(_) => "TransportError",
            ChatError::Status { .. } => "UpstreamStatusError",
            ChatError::Decode(_) => "DecodeError",
            ChatError::EmptyResponse => "EmptyResponse",
        }
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
