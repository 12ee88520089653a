use crate::batching::{BatchContext, MessageBatch};
use crate::logging::batch as log;
use crate::{Notification, NotifierBuilder};
use courier_std::codecs;
use courier_std::errors::{Result, TransportError};
use courier_std::traits::Transport;
use courier_std::types::{
    AttributeValue, MessageAttribute, MessageAttributes, MessageRecord, TopicArn,
};

/// Queues notifications for a single topic and delivers them in batches.
///
/// A Notifier keeps an ordered queue of messages together with the context they were produced
/// under: the recipient topic, the subject and the message attributes. Sending a notification
/// under the current context only appends it to the queue. Anything that changes the context
/// first commits the queue, so a single batch never mixes subjects, attribute sets or
/// recipients.
///
/// Delivery happens in [commit](Notifier::commit), which hands the queue to the injected
/// [Transport]. Commits are triggered by:
///
/// - a [send](Notifier::send) with a subject or attribute set different from the current one,
/// - [set_subject](Notifier::set_subject) or [set_recipient](Notifier::set_recipient) with a new
///   value,
/// - a notification built with [commit_immediately](Notification::commit_immediately),
/// - an explicit call to [commit](Notifier::commit) or [finish](Notifier::finish).
///
/// Every mutating method takes `&mut self`; share a Notifier between tasks by wrapping it in a
/// mutex.
///
/// **Note:** Dropping a Notifier does not deliver its queue. Call [finish](Notifier::finish)
/// once no more notifications will be sent.
#[derive(Debug)]
pub struct Notifier<T: Transport> {
    transport: T,
    recipient: TopicArn,
    context: BatchContext,
    batch: MessageBatch,
}

impl<T: Transport> Notifier<T> {
    pub(crate) fn new(
        transport: T,
        recipient: TopicArn,
        subject: String,
        attributes: MessageAttributes,
    ) -> Self {
        Self {
            transport,
            recipient,
            context: BatchContext::new(subject, attributes),
            batch: MessageBatch::default(),
        }
    }

    /// Starts building a Notifier delivering through `transport`.
    pub fn builder(transport: T) -> NotifierBuilder<T> {
        NotifierBuilder::new(transport)
    }

    pub fn recipient(&self) -> &TopicArn {
        &self.recipient
    }

    pub fn subject(&self) -> &str {
        &self.context.subject
    }

    pub fn message_attributes(&self) -> &MessageAttributes {
        &self.context.attributes
    }

    /// The messages queued since the last commit, oldest first.
    pub fn queue(&self) -> &[MessageRecord] {
        self.batch.records()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Queues a notification.
    ///
    /// If the notification carries a subject or attribute set that differs from the current
    /// one, the queue is committed first and the notification's values become the current
    /// context. Attribute sets are compared by content, not by identity.
    ///
    /// # Errors
    ///
    /// Returns [TransportError::Publish] if a commit triggered by this call fails. When the
    /// failing commit was caused by a context change, the change is not applied and the
    /// notification is not queued.
    pub async fn send(&mut self, notification: impl Into<Notification>) -> Result<()> {
        let Notification {
            text,
            subject,
            attributes,
            commit_immediately,
        } = notification.into();

        let context = self.context.resolve(subject, attributes);

        if context != self.context {
            log::context_changed(&self.context.subject, &context.subject, self.batch.len());
            self.commit().await?;
            self.context = context;
        }

        self.batch.push(self.context.record(text));
        log::queued(&self.recipient, self.batch.len());

        if commit_immediately {
            self.commit().await?;
        }

        Ok(())
    }

    /// Changes the subject of subsequent notifications, committing the queue first if the
    /// subject differs from the current one.
    ///
    /// # Errors
    ///
    /// Returns [TransportError::Publish] if the commit fails, in which case the subject is left
    /// unchanged.
    pub async fn set_subject(&mut self, subject: impl Into<String>) -> Result<()> {
        let subject = subject.into();

        if subject != self.context.subject {
            self.commit().await?;
            self.context.subject = subject;
        }

        Ok(())
    }

    /// Changes the topic notifications are delivered to, committing the queue to the previous
    /// topic first if the recipient differs from the current one.
    ///
    /// # Errors
    ///
    /// - Returns [ValidationError::InvalidRecipient](courier_std::errors::ValidationError::InvalidRecipient)
    ///   if `recipient` is not a topic ARN. Nothing is committed or changed.
    /// - Returns [TransportError::Publish] if the commit fails, in which case the recipient is
    ///   left unchanged.
    pub async fn set_recipient(&mut self, recipient: &str) -> Result<()> {
        let recipient = TopicArn::parse(recipient)?;

        if recipient != self.recipient {
            self.commit().await?;
            log::recipient_changed(&self.recipient, &recipient);
            self.recipient = recipient;
        }

        Ok(())
    }

    /// Delivers the queued messages to the current recipient.
    ///
    /// Committing an empty queue does nothing and makes no transport call. The subject,
    /// attributes and recipient are never changed by a commit.
    ///
    /// # Errors
    ///
    /// Returns [TransportError::Publish] if the transport fails. The queue is emptied before
    /// the transport is called, so the messages of a failed commit are not queued again; the
    /// error reports how many were undelivered.
    pub async fn commit(&mut self) -> Result<()> {
        if self.batch.is_empty() {
            return Ok(());
        }

        let records = self.batch.drain();
        log::committing(&self.recipient, records.len());

        if let Err(source) = self.transport.publish(&self.recipient, &records).await {
            let err = TransportError::Publish {
                topic: self.recipient.to_string(),
                undelivered: records.len(),
                source,
            };
            log::commit_failed(&err);
            return Err(err.into());
        }

        log::committed(&self.recipient, records.len());
        Ok(())
    }

    /// Commits any queued messages and consumes the Notifier.
    ///
    /// # Errors
    ///
    /// Returns [TransportError::Publish] if the final commit fails.
    pub async fn finish(mut self) -> Result<()> {
        self.commit().await
    }

    /// Converts a raw attribute value into the `{DataType, StringValue}` wire format.
    ///
    /// See [format_attribute](courier_std::codecs::format_attribute).
    pub fn format_attribute(value: &AttributeValue) -> MessageAttribute {
        codecs::format_attribute(value)
    }
}

impl<T: Transport> Drop for Notifier<T> {
    fn drop(&mut self) {
        if !self.batch.is_empty() {
            log::dropped_uncommitted(&self.recipient, self.batch.len());
        }
    }
}
