use super::format_attributes;
use crate::types::{MessageAttribute, MessageRecord, TopicArn};
use serde::Serialize;
use std::collections::BTreeMap;

/// Separates message texts when a whole batch is delivered as a single publish call.
pub const MESSAGE_SEPARATOR: &str = "\n\n#####\n\n";

/// The payload of a single publish call to the remote service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishRequest {
    pub topic_arn: TopicArn,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub message_attributes: BTreeMap<String, MessageAttribute>,
}

impl PublishRequest {
    /// Builds a request carrying a single record.
    pub fn single(topic: &TopicArn, record: &MessageRecord) -> Self {
        Self::build(topic, record, record.text().to_owned())
    }

    /// Builds one request carrying every record of `batch`, with the texts joined by
    /// [MESSAGE_SEPARATOR].
    ///
    /// The subject and attributes are taken from the first record, as every record in a batch
    /// shares them. Returns [None] for an empty batch.
    pub fn joined(topic: &TopicArn, batch: &[MessageRecord]) -> Option<Self> {
        let first = batch.first()?;
        let message = batch
            .iter()
            .map(MessageRecord::text)
            .collect::<Vec<_>>()
            .join(MESSAGE_SEPARATOR);

        Some(Self::build(topic, first, message))
    }

    fn build(topic: &TopicArn, record: &MessageRecord, message: String) -> Self {
        let subject = Some(record.subject())
            .filter(|subject| !subject.is_empty())
            .map(str::to_owned);

        Self {
            topic_arn: topic.clone(),
            message,
            subject,
            message_attributes: format_attributes(record.attributes()),
        }
    }
}
