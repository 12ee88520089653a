use courier_std::types::{AttributeValue, MessageAttributes};

/// A notification handed to [Notifier::send](crate::Notifier::send).
///
/// Only the text is required. A subject or attribute set left unspecified falls back to the
/// notifier's current one; a supplied value that differs from the current one commits the queue
/// before the notification is queued.
///
/// Plain strings convert into a [Notification] directly:
///
/// ```
/// use courier::Notification;
///
/// let plain: Notification = "disk almost full".into();
/// let detailed = Notification::new("disk almost full")
///     .subject("Alerts")
///     .attribute("severity", "high");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub(crate) text: String,
    pub(crate) subject: Option<String>,
    pub(crate) attributes: Option<MessageAttributes>,
    pub(crate) commit_immediately: bool,
}

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subject: None,
            attributes: None,
            commit_immediately: false,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Replaces the attribute set the notification is sent with.
    pub fn attributes(mut self, attributes: MessageAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Adds a single attribute, starting from an empty set if none was given yet.
    pub fn attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes
            .get_or_insert_with(MessageAttributes::new)
            .insert(name.into(), value.into());
        self
    }

    /// Commits the queue, including this notification, before `send` returns.
    pub fn commit_immediately(mut self) -> Self {
        self.commit_immediately = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Notification {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Notification {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
