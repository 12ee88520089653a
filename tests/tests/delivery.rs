use async_trait::async_trait;
use courier::prelude::*;
use courier::std::codecs::PublishRequest;
use courier::std::types::Subscription;
use courier::transport::{ApiTransport, DeliveryMode, MemoryTransport};
use courier_tests::{batch_sizes, init_tracing, notifier, TEST_TOPIC};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// Captures every request in the shape it would be sent over the wire.
#[derive(Clone, Default)]
struct WireClient {
    payloads: Arc<Mutex<Vec<Value>>>,
}

impl WireClient {
    fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().clone()
    }
}

#[async_trait]
impl PublishClient for WireClient {
    async fn publish(&self, request: PublishRequest) -> anyhow::Result<()> {
        let payload = serde_json::to_value(&request)?;
        self.payloads.lock().push(payload);
        Ok(())
    }

    async fn create_topic(&self, name: &str) -> anyhow::Result<String> {
        Ok(format!("arn:aws:sns:eu-west-1:000000000000:{name}"))
    }

    async fn create_subscription(
        &self,
        _topic_arn: &str,
        _protocol: &str,
        _endpoint: &str,
    ) -> anyhow::Result<Subscription> {
        Ok(Subscription::pending_confirmation())
    }
}

fn api_notifier(mode: DeliveryMode) -> (Notifier<ApiTransport<WireClient>>, WireClient) {
    init_tracing();

    let client = WireClient::default();
    let transport = ApiTransport::new(client.clone()).with_delivery_mode(mode);
    let notifier = Notifier::builder(transport)
        .recipient(TEST_TOPIC)
        .subject("Prices")
        .build()
        .unwrap();

    (notifier, client)
}

#[tokio::test]
async fn joined_batches_become_one_wire_request() -> anyhow::Result<()> {
    let (mut notifier, client) = api_notifier(DeliveryMode::Joined);

    notifier
        .send(
            Notification::new("apples up")
                .attribute("price", 100)
                .attribute("tags", vec!["fruit", "red"]),
        )
        .await?;
    notifier.send("pears down").await?;
    notifier.finish().await?;

    let payloads = client.payloads();
    assert_eq!(payloads.len(), 1);

    let payload = &payloads[0];
    assert_eq!(payload["TopicArn"], TEST_TOPIC);
    assert_eq!(payload["Subject"], "Prices");
    assert_eq!(payload["Message"], "apples up\n\n#####\n\npears down");
    assert_eq!(payload["MessageAttributes"]["price"]["DataType"], "Number");
    assert_eq!(payload["MessageAttributes"]["price"]["StringValue"], "100");
    assert_eq!(payload["MessageAttributes"]["tags"]["DataType"], "String.Array");
    assert_eq!(
        payload["MessageAttributes"]["tags"]["StringValue"],
        r#"["fruit", "red"]"#
    );

    Ok(())
}

#[tokio::test]
async fn individual_delivery_sends_one_request_per_message() -> anyhow::Result<()> {
    let (mut notifier, client) = api_notifier(DeliveryMode::Individually);

    notifier.send("one").await?;
    notifier.send("two").await?;
    notifier.set_subject("Other").await?;

    let messages = client
        .payloads()
        .iter()
        .map(|payload| payload["Message"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["one", "two"]);
    assert!(notifier.queue().is_empty());

    Ok(())
}

#[tokio::test]
async fn failed_commit_reports_undelivered_messages() {
    let (mut notifier, transport) = notifier();

    notifier.send("one").await.unwrap();
    notifier.send("two").await.unwrap();
    transport.fail_publishes(true);

    let err = notifier.commit().await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(
        err.to_string(),
        format!("Failed to publish 2 message(s) to topic '{TEST_TOPIC}'.")
    );
    assert!(notifier.queue().is_empty());

    transport.fail_publishes(false);
    notifier.send("three").await.unwrap();
    notifier.commit().await.unwrap();
    assert_eq!(batch_sizes(&transport), vec![1]);
}

#[tokio::test]
async fn shared_notifier_is_serialised_by_a_mutex() {
    init_tracing();

    let transport = MemoryTransport::new();
    let notifier = Notifier::builder(transport.clone())
        .recipient(TEST_TOPIC)
        .build()
        .unwrap();
    let notifier = Arc::new(tokio::sync::Mutex::new(notifier));

    let handles = (0..4)
        .map(|worker| {
            let notifier = notifier.clone();
            tokio::spawn(async move {
                for i in 0..5 {
                    notifier
                        .lock()
                        .await
                        .send(format!("worker {worker} message {i}"))
                        .await
                        .unwrap();
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.await.unwrap();
    }

    let mut notifier = notifier.lock().await;
    assert_eq!(notifier.queue().len(), 20);
    notifier.commit().await.unwrap();
    assert_eq!(batch_sizes(&transport), vec![20]);
}
