use courier::std::errors::{CourierError, ValidationError};
use courier::Notifier;
use courier::NotifierConfig;
use courier::transport::MemoryTransport;
use courier_tests::{batch_sizes, notifier, TEST_TOPIC};
use serde_json::json;

#[tokio::test]
async fn invalid_recipient_is_rejected_before_any_change() {
    let (mut notifier, transport) = notifier();
    notifier.send("queued").await.unwrap();

    let err = notifier
        .set_recipient("just_new_recipient_not_full_arn")
        .await
        .unwrap_err();

    assert_eq!(
        err.as_validation(),
        Some(&ValidationError::InvalidRecipient(
            "just_new_recipient_not_full_arn".to_owned()
        ))
    );
    assert_eq!(notifier.recipient(), TEST_TOPIC);
    assert_eq!(notifier.queue().len(), 1);
    assert_eq!(transport.publish_calls(), 0);
}

#[tokio::test]
async fn new_recipient_receives_only_later_messages() {
    let (mut notifier, transport) = notifier();

    notifier.send("for the old topic").await.unwrap();
    notifier.set_recipient("arn:aws:sns:new_recipient").await.unwrap();
    notifier.send("for the new topic").await.unwrap();
    notifier.finish().await.unwrap();

    let published = transport.published();
    assert_eq!(batch_sizes(&transport), vec![1, 1]);
    assert_eq!(published[0].topic, TEST_TOPIC);
    assert_eq!(published[1].topic, "arn:aws:sns:new_recipient");
    assert_eq!(published[1].records[0].text(), "for the new topic");
}

#[tokio::test]
async fn same_recipient_keeps_queue() {
    let (mut notifier, transport) = notifier();

    notifier.send("queued").await.unwrap();
    notifier.set_recipient(TEST_TOPIC).await.unwrap();

    assert_eq!(notifier.queue().len(), 1);
    assert_eq!(transport.publish_calls(), 0);
}

#[test]
fn configured_recipient_is_reset_for_tests() {
    let config = NotifierConfig::from_value(json!({
        "subject": "subj",
        "recepient": "arn::some_topic",
    }))
    .unwrap();

    let notifier = Notifier::builder(MemoryTransport::new())
        .with_config(config)
        .override_recipient_for_testing(TEST_TOPIC)
        .build()
        .unwrap();

    assert_eq!(notifier.recipient(), TEST_TOPIC);
    assert_eq!(notifier.subject(), "subj");
}

#[test]
fn configured_recipient_is_validated() {
    let config = NotifierConfig::from_value(json!({ "recipient": "arn::some_topic" })).unwrap();

    let err = Notifier::builder(MemoryTransport::new())
        .with_config(config)
        .build()
        .unwrap_err();

    assert!(matches!(
        err,
        CourierError::Validation(ValidationError::InvalidRecipient(_))
    ));
}
