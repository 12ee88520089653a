use anyhow::bail;
use async_trait::async_trait;
use courier_std::traits::Transport;
use courier_std::types::{MessageRecord, Subscription, TopicArn};
use parking_lot::Mutex;
use std::sync::Arc;

/// A batch handed to [MemoryTransport::publish](Transport::publish).
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedBatch {
    pub topic: TopicArn,
    pub records: Vec<MessageRecord>,
}

/// A subscription requested through a [MemoryTransport].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub topic_arn: String,
    pub protocol: String,
    pub endpoint: String,
}

#[derive(Debug, Default)]
struct MemoryState {
    published: Vec<PublishedBatch>,
    publish_calls: usize,
    topics: Vec<String>,
    subscriptions: Vec<SubscriptionRequest>,
    fail_publishes: bool,
    fail_provisioning: bool,
}

/// A [Transport] recording every call in memory.
///
/// Clones share the same state, so a test can keep a handle to the transport after moving a
/// clone into a [Notifier](crate::Notifier).
///
/// Topics are created as `arn:aws:sns:us-east-1:000000000000:<name>` unless a fixed identifier
/// is configured with [with_topic_arn](MemoryTransport::with_topic_arn). Subscriptions are
/// always confirmed straight away.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    state: Arc<Mutex<MemoryState>>,
    topic_arn: Option<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every topic creation return `topic_arn`.
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Makes subsequent publish calls fail (or succeed again).
    pub fn fail_publishes(&self, fail: bool) {
        self.state.lock().fail_publishes = fail;
    }

    /// Makes subsequent topic and subscription creation fail (or succeed again).
    pub fn fail_provisioning(&self, fail: bool) {
        self.state.lock().fail_provisioning = fail;
    }

    /// Every batch delivered successfully, oldest first.
    pub fn published(&self) -> Vec<PublishedBatch> {
        self.state.lock().published.clone()
    }

    /// The number of publish calls made, including failed ones.
    pub fn publish_calls(&self) -> usize {
        self.state.lock().publish_calls
    }

    pub fn created_topics(&self) -> Vec<String> {
        self.state.lock().topics.clone()
    }

    pub fn created_subscriptions(&self) -> Vec<SubscriptionRequest> {
        self.state.lock().subscriptions.clone()
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.published.clear();
        state.publish_calls = 0;
        state.topics.clear();
        state.subscriptions.clear();
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn publish(&self, topic: &TopicArn, batch: &[MessageRecord]) -> anyhow::Result<()> {
        let mut state = self.state.lock();
        state.publish_calls += 1;

        if state.fail_publishes {
            bail!("publishing to '{topic}' is disabled");
        }

        state.published.push(PublishedBatch {
            topic: topic.clone(),
            records: batch.to_vec(),
        });

        Ok(())
    }

    async fn create_topic(&self, name: &str) -> anyhow::Result<String> {
        let mut state = self.state.lock();

        if state.fail_provisioning {
            bail!("creating topic '{name}' is disabled");
        }

        state.topics.push(name.to_owned());

        let topic_arn = self
            .topic_arn
            .clone()
            .unwrap_or_else(|| format!("arn:aws:sns:us-east-1:000000000000:{name}"));

        Ok(topic_arn)
    }

    async fn create_subscription(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> anyhow::Result<Subscription> {
        let mut state = self.state.lock();

        if state.fail_provisioning {
            bail!("subscribing to '{topic_arn}' is disabled");
        }

        let index = state.subscriptions.len();
        state.subscriptions.push(SubscriptionRequest {
            topic_arn: topic_arn.to_owned(),
            protocol: protocol.to_owned(),
            endpoint: endpoint.to_owned(),
        });

        Ok(Subscription::confirmed(format!("{topic_arn}:{index}")))
    }
}
