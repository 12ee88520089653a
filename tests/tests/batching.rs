use courier::prelude::*;
use courier_tests::{batch_sizes, notifier, TEST_SUBJECT};
use rand::Rng;

#[tokio::test]
async fn unchanged_context_never_commits() {
    let mut rng = rand::thread_rng();
    let (mut notifier, transport) = notifier();
    let count = rng.gen_range(1..50);

    for i in 0..count {
        let notification = if rng.gen_bool(0.5) {
            Notification::new(format!("message {i}")).subject(TEST_SUBJECT)
        } else {
            Notification::new(format!("message {i}"))
        };

        notifier.send(notification).await.unwrap();
    }

    assert_eq!(notifier.queue().len(), count);
    assert_eq!(transport.publish_calls(), 0);
}

#[tokio::test]
async fn new_subject_commits_previous_batch() {
    let (mut notifier, transport) = notifier();

    notifier.send(Notification::new("m1").subject("A")).await.unwrap();
    assert_eq!(notifier.queue().len(), 1);

    notifier.send(Notification::new("m2").subject("B")).await.unwrap();

    assert_eq!(notifier.queue().len(), 1);
    assert_eq!(notifier.queue()[0].text(), "m2");
    assert_eq!(batch_sizes(&transport), vec![1]);
    assert_eq!(transport.published()[0].records[0].subject(), "A");
}

#[tokio::test]
async fn setting_same_subject_keeps_queue() {
    let (mut notifier, transport) = notifier();

    notifier.send("first").await.unwrap();
    notifier.send("second").await.unwrap();
    let before = notifier.queue().to_vec();

    notifier.set_subject(TEST_SUBJECT).await.unwrap();

    assert_eq!(notifier.queue(), before.as_slice());
    assert_eq!(transport.publish_calls(), 0);
}

#[tokio::test]
async fn attribute_changes_are_compared_by_content() {
    let (mut notifier, transport) = notifier();

    notifier.send("test message").await.unwrap();

    notifier
        .send(Notification::new("test message").attributes(attributes([("price", 100)])))
        .await
        .unwrap();
    assert_eq!(batch_sizes(&transport), vec![1]);
    assert_eq!(notifier.queue().len(), 1);

    // A freshly built, equal attribute set is the same context.
    notifier
        .send(Notification::new("test message").attributes(attributes([("price", 100)])))
        .await
        .unwrap();
    assert_eq!(notifier.queue().len(), 2);

    notifier
        .send(
            Notification::new("test message")
                .attribute("price", 100)
                .attribute("cancellation", true),
        )
        .await
        .unwrap();

    assert_eq!(batch_sizes(&transport), vec![1, 2]);
    assert_eq!(notifier.queue().len(), 1);
}

#[tokio::test]
async fn equal_numbers_keep_the_attribute_context() {
    let (mut notifier, transport) = notifier();

    notifier
        .send(Notification::new("integer price").attribute("price", 100))
        .await
        .unwrap();
    notifier
        .send(Notification::new("float price").attribute("price", 100.0))
        .await
        .unwrap();

    assert_eq!(transport.publish_calls(), 0);
    assert_eq!(notifier.queue().len(), 2);

    notifier
        .send(Notification::new("new price").attribute("price", 100.5))
        .await
        .unwrap();

    assert_eq!(batch_sizes(&transport), vec![2]);
    assert_eq!(notifier.queue().len(), 1);
}

#[tokio::test]
async fn commit_is_idempotent() {
    let (mut notifier, transport) = notifier();

    notifier.commit().await.unwrap();
    assert!(notifier.queue().is_empty());
    assert_eq!(transport.publish_calls(), 0);

    notifier.send("only").await.unwrap();
    notifier.commit().await.unwrap();
    notifier.commit().await.unwrap();

    assert!(notifier.queue().is_empty());
    assert_eq!(transport.publish_calls(), 1);
}

#[tokio::test]
async fn commit_preserves_context() {
    let (mut notifier, _) = notifier();

    notifier
        .send(Notification::new("first").subject("Orders").attribute("region", "eu"))
        .await
        .unwrap();
    notifier.commit().await.unwrap();

    assert_eq!(notifier.subject(), "Orders");
    assert_eq!(notifier.message_attributes(), &attributes([("region", "eu")]));
    assert_eq!(notifier.recipient(), courier_tests::TEST_TOPIC);
}

#[tokio::test]
async fn every_batch_shares_one_context() {
    let (mut notifier, transport) = notifier();

    let subjects = ["A", "A", "B", "B", "B", "A", "C"];
    for (i, subject) in subjects.iter().enumerate() {
        notifier
            .send(Notification::new(format!("m{i}")).subject(*subject))
            .await
            .unwrap();
    }
    notifier.finish().await.unwrap();

    assert_eq!(batch_sizes(&transport), vec![2, 3, 1, 1]);

    for batch in transport.published() {
        let first = &batch.records[0];
        assert!(batch
            .records
            .iter()
            .all(|r| r.subject() == first.subject() && r.attributes() == first.attributes()));
    }
}
