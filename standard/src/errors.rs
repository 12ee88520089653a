use thiserror::Error;

pub type Result<T, E = CourierError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid recipient '{0}': a topic ARN must begin with 'arn:aws:'.")]
    InvalidRecipient(String),

    #[error("No recipient was configured for the notifier.")]
    MissingRecipient,

    #[error("You passed invalid topic name")]
    EmptyTopicName,

    #[error("You must send valid topic ARN, Protocol and Endpoint to add a subscription (missing {field}).")]
    IncompleteSubscription { field: &'static str },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to publish {undelivered} message(s) to topic '{topic}'.")]
    Publish {
        topic: String,
        undelivered: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to create topic '{name}'.")]
    CreateTopic {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to create subscription on topic '{topic}'.")]
    CreateSubscription {
        topic: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unknown message attribute data type: {0}")]
    UnknownDataType(String),

    #[error("Failed to decode message attribute value.")]
    DecodeFailure(#[source] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse notifier configuration.")]
    ParseFailure(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CourierError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CourierError {
    /// Returns the [ValidationError] if this error was raised by argument validation.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CourierError::Validation(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, CourierError::Transport(_))
    }
}
