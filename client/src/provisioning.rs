use crate::logging::provisioning as log;
use crate::Notifier;
use courier_std::errors::{Result, TransportError, ValidationError};
use courier_std::traits::Transport;
use courier_std::types::Subscription;

impl<T: Transport> Notifier<T> {
    /// Provisions a topic through the notifier's transport and returns its identifier.
    ///
    /// # Errors
    ///
    /// - Returns [ValidationError::EmptyTopicName] if `name` is empty. The transport is not
    ///   called.
    /// - Returns [TransportError::CreateTopic] if the transport fails.
    pub async fn create_topic(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(ValidationError::EmptyTopicName.into());
        }

        log::creating_topic(name);

        let topic_arn = self
            .transport()
            .create_topic(name)
            .await
            .map_err(|source| TransportError::CreateTopic {
                name: name.to_owned(),
                source,
            })?;

        log::topic_created(name, &topic_arn);
        Ok(topic_arn)
    }

    /// Subscribes `endpoint` to `topic_arn` over `protocol` through the notifier's transport.
    ///
    /// # Errors
    ///
    /// - Returns [ValidationError::IncompleteSubscription] naming the first empty argument. The
    ///   transport is not called.
    /// - Returns [TransportError::CreateSubscription] if the transport fails.
    pub async fn create_subscription(
        &self,
        topic_arn: &str,
        protocol: &str,
        endpoint: &str,
    ) -> Result<Subscription> {
        let missing = [
            ("topic ARN", topic_arn),
            ("protocol", protocol),
            ("endpoint", endpoint),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty());

        if let Some((field, _)) = missing {
            return Err(ValidationError::IncompleteSubscription { field }.into());
        }

        log::creating_subscription(topic_arn, protocol, endpoint);

        let subscription = self
            .transport()
            .create_subscription(topic_arn, protocol, endpoint)
            .await
            .map_err(|source| TransportError::CreateSubscription {
                topic: topic_arn.to_owned(),
                source,
            })?;

        log::subscription_created(topic_arn, subscription.is_pending());
        Ok(subscription)
    }
}
