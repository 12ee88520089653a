pub fn creating_topic(name: &str) {
    tracing::info!(name, "Creating topic.");
}

pub fn topic_created(name: &str, topic_arn: &str) {
    tracing::info!(name, topic_arn, "Created topic.");
}

pub fn creating_subscription(topic_arn: &str, protocol: &str, endpoint: &str) {
    tracing::info!(topic_arn, protocol, endpoint, "Creating subscription.");
}

pub fn subscription_created(topic_arn: &str, pending_confirmation: bool) {
    tracing::info!(topic_arn, pending_confirmation, "Created subscription.");
}
