use courier_std::types::{MessageAttributes, MessageRecord};

/// The subject and attributes shared by every record in the current batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BatchContext {
    pub(crate) subject: String,
    pub(crate) attributes: MessageAttributes,
}

impl BatchContext {
    pub fn new(subject: String, attributes: MessageAttributes) -> Self {
        Self {
            subject,
            attributes,
        }
    }

    /// Resolves the context a message would be queued under, falling back to the current
    /// subject and attributes for whatever was not supplied.
    pub fn resolve(
        &self,
        subject: Option<String>,
        attributes: Option<MessageAttributes>,
    ) -> BatchContext {
        BatchContext {
            subject: subject.unwrap_or_else(|| self.subject.clone()),
            attributes: attributes.unwrap_or_else(|| self.attributes.clone()),
        }
    }

    pub fn record(&self, text: String) -> MessageRecord {
        MessageRecord::new(text, self.subject.as_str(), self.attributes.clone())
    }
}
