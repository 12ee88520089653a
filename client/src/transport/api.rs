use async_trait::async_trait;
use courier_std::codecs::PublishRequest;
use courier_std::traits::{PublishClient, Transport};
use courier_std::types::{MessageRecord, Subscription, TopicArn};
use tracing::debug;

/// How a batch of records maps onto publish calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    /// One publish call per batch, with the texts joined by
    /// [MESSAGE_SEPARATOR](courier_std::codecs::MESSAGE_SEPARATOR).
    #[default]
    Joined,
    /// One publish call per record, in queue order. Delivery stops at the first failure.
    Individually,
}

/// Adapts a single-call [PublishClient] into a [Transport].
#[derive(Debug, Clone)]
pub struct ApiTransport<C> {
    client: C,
    delivery_mode: DeliveryMode,
}

impl<C: PublishClient> ApiTransport<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            delivery_mode: DeliveryMode::default(),
        }
    }

    pub fn with_delivery_mode(mut self, delivery_mode: DeliveryMode) -> Self {
        self.delivery_mode = delivery_mode;
        self
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        self.delivery_mode
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: PublishClient> Transport for ApiTransport<C> {
    async fn publish(&self, topic: &TopicArn, batch: &[MessageRecord]) -> anyhow::Result<()> {
        match self.delivery_mode {
            DeliveryMode::Joined => {
                if let Some(request) = PublishRequest::joined(topic, batch) {
                    debug!(topic = topic.as_str(), batch_len = batch.len(), "Publishing joined batch.");
                    self.client.publish(request).await?;
                }
            }
            DeliveryMode::Individually => {
                for record in batch {
                    self.client
                        .publish(PublishRequest::single(topic, record))
                        .await?;
                }
            }
        }

        Ok(())
    }

    async fn create_topic(&self, name: &str) -> anyhow::Result<String> {
        self.client.create_topic(name).await
    }

    async fn create_subscription(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> anyhow::Result<Subscription> {
        self.client
            .create_subscription(topic_arn, protocol, endpoint)
            .await
    }
}
