use courier_std::errors::TransportError;
use courier_std::types::TopicArn;

pub fn queued(topic: &TopicArn, queue_len: usize) {
    tracing::debug!(topic = topic.as_str(), queue_len, "Queued notification.");
}

pub fn context_changed(previous_subject: &str, subject: &str, pending: usize) {
    tracing::debug!(
        previous_subject,
        subject,
        pending,
        "Notification context changed, committing pending batch."
    );
}

pub fn committing(topic: &TopicArn, batch_len: usize) {
    tracing::debug!(topic = topic.as_str(), batch_len, "Committing notification batch.");
}

pub fn committed(topic: &TopicArn, batch_len: usize) {
    tracing::info!(topic = topic.as_str(), batch_len, "Committed notification batch.");
}

pub fn commit_failed(err: &TransportError) {
    tracing::error!(error = err.to_string(), "Failed to commit notification batch.");
}

pub fn recipient_changed(previous: &TopicArn, recipient: &TopicArn) {
    tracing::info!(
        previous = previous.as_str(),
        recipient = recipient.as_str(),
        "Notification recipient changed."
    );
}

pub fn recipient_overridden(configured: Option<&str>, recipient: &TopicArn) {
    tracing::info!(
        configured,
        recipient = recipient.as_str(),
        "Overriding configured recipient for testing."
    );
}

pub fn dropped_uncommitted(topic: &TopicArn, pending: usize) {
    tracing::warn!(
        topic = topic.as_str(),
        pending,
        "Notifier dropped with uncommitted notifications. Call `finish` to deliver them."
    );
}
