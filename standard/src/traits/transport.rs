use crate::codecs::PublishRequest;
use crate::types::{MessageRecord, Subscription, TopicArn};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The transport collaborator a notifier delivers its batches through.
///
/// Failures are opaque to Courier: whatever error the implementation returns is wrapped as the
/// source of a [TransportError](crate::errors::TransportError) and handed back to the caller
/// unchanged. Retries, partial failure reporting and delivery guarantees, if any, belong to the
/// implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Delivers a batch of records to `topic`.
    ///
    /// Every record in `batch` shares the same subject and attributes. Whether the batch is sent
    /// as one call or one call per record is up to the implementation.
    async fn publish(&self, topic: &TopicArn, batch: &[MessageRecord]) -> Result<()>;

    /// Provisions a topic and returns its identifier.
    async fn create_topic(&self, name: &str) -> Result<String>;

    /// Provisions a subscription of `endpoint` to `topic_arn` over `protocol`.
    async fn create_subscription(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<Subscription>;
}

/// A low level client issuing exactly one remote API call per method invocation.
///
/// This is the seam SDK clients are adapted to. The `courier` crate turns any [PublishClient]
/// into a [Transport] by deciding how a batch maps onto [PublishRequest]s.
#[async_trait]
pub trait PublishClient: Send + Sync {
    async fn publish(&self, request: PublishRequest) -> Result<()>;

    async fn create_topic(&self, name: &str) -> Result<String>;

    async fn create_subscription(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<Subscription>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn publish(&self, topic: &TopicArn, batch: &[MessageRecord]) -> Result<()> {
        (**self).publish(topic, batch).await
    }

    async fn create_topic(&self, name: &str) -> Result<String> {
        (**self).create_topic(name).await
    }

    async fn create_subscription(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<Subscription> {
        (**self)
            .create_subscription(topic_arn, protocol, endpoint)
            .await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn publish(&self, topic: &TopicArn, batch: &[MessageRecord]) -> Result<()> {
        (**self).publish(topic, batch).await
    }

    async fn create_topic(&self, name: &str) -> Result<String> {
        (**self).create_topic(name).await
    }

    async fn create_subscription(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<Subscription> {
        (**self)
            .create_subscription(topic_arn, protocol, endpoint)
            .await
    }
}
