use crate::logging::batch as log;
use crate::{Notifier, NotifierConfig};
use courier_std::errors::{Result, ValidationError};
use courier_std::traits::Transport;
use courier_std::types::{MessageAttributes, TopicArn};

/// A convenient builder struct used to build a [Notifier] instance.
///
/// Values can come from a [NotifierConfig] mapping or from the explicit setters. Explicit
/// setters take precedence over the configuration, regardless of the order they are called in.
///
/// # Examples
///
/// ```
/// use courier::{Notifier, NotifierConfig};
/// use courier::transport::MemoryTransport;
/// use serde_json::json;
///
/// let config = NotifierConfig::from_value(json!({
///     "subject": "Nightly report",
///     "recipient": "arn:aws:sns:us-west-2:000000000000:reports",
/// }))
/// .unwrap();
///
/// let notifier = Notifier::builder(MemoryTransport::new())
///     .with_config(config)
///     .build()
///     .unwrap();
///
/// assert_eq!(notifier.subject(), "Nightly report");
/// ```
#[derive(Debug)]
pub struct NotifierBuilder<T> {
    transport: T,
    config: NotifierConfig,
    recipient: Option<String>,
    subject: Option<String>,
    attributes: MessageAttributes,
    recipient_override: Option<String>,
}

impl<T: Transport> NotifierBuilder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: NotifierConfig::default(),
            recipient: None,
            subject: None,
            attributes: MessageAttributes::new(),
            recipient_override: None,
        }
    }

    pub fn with_config(mut self, config: NotifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the attribute context the first batch is queued under.
    pub fn message_attributes(mut self, attributes: MessageAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Replaces whatever recipient was configured with `recipient`.
    ///
    /// Intended for test setups that must never publish to a production topic. The replaced
    /// recipient is not validated.
    pub fn override_recipient_for_testing(mut self, recipient: impl Into<String>) -> Self {
        self.recipient_override = Some(recipient.into());
        self
    }

    /// Builds the [Notifier] with an empty queue.
    ///
    /// # Errors
    ///
    /// - Returns [ValidationError::MissingRecipient] if no recipient was configured.
    /// - Returns [ValidationError::InvalidRecipient] if the recipient is not a topic ARN.
    pub fn build(self) -> Result<Notifier<T>> {
        let configured = self.recipient.or(self.config.recipient);

        let recipient = match self.recipient_override {
            Some(recipient_override) => {
                let recipient = TopicArn::parse(recipient_override)?;
                log::recipient_overridden(configured.as_deref(), &recipient);
                recipient
            }
            None => TopicArn::parse(configured.ok_or(ValidationError::MissingRecipient)?)?,
        };

        let subject = self.subject.or(self.config.subject).unwrap_or_default();

        Ok(Notifier::new(
            self.transport,
            recipient,
            subject,
            self.attributes,
        ))
    }
}
