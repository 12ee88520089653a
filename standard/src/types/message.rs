use super::MessageAttributes;

/// A message waiting in the notifier's queue.
///
/// Records are snapshots: the subject and attributes are copied from the notifier's context at
/// the moment the message was queued, so a transport never has to consult the notifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    text: String,
    subject: String,
    attributes: MessageAttributes,
}

impl MessageRecord {
    pub fn new(
        text: impl Into<String>,
        subject: impl Into<String>,
        attributes: MessageAttributes,
    ) -> Self {
        Self {
            text: text.into(),
            subject: subject.into(),
            attributes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn attributes(&self) -> &MessageAttributes {
        &self.attributes
    }
}
