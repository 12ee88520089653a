use courier::std::codecs::{format_attribute, parse_attribute};
use courier::std::types::{AttributeValue, DataType, MessageAttribute};
use courier::transport::MemoryTransport;
use courier::Notifier;

fn format(value: impl Into<AttributeValue>) -> MessageAttribute {
    Notifier::<MemoryTransport>::format_attribute(&value.into())
}

#[test]
fn formats_values_for_the_wire() {
    assert_eq!(format(10), MessageAttribute::new(DataType::Number, "10"));
    assert_eq!(format(10.99), MessageAttribute::new(DataType::Number, "10.99"));
    assert_eq!(format(10.0), MessageAttribute::new(DataType::Number, "10.0"));
    assert_eq!(format("Test"), MessageAttribute::new(DataType::String, "Test"));
    assert_eq!(
        format(vec!["Test1", "Test2", "Test3"]),
        MessageAttribute::new(DataType::StringArray, r#"["Test1", "Test2", "Test3"]"#)
    );
}

#[test]
fn notifier_and_codec_agree() {
    let value = AttributeValue::from(vec!["b", "a"]);
    assert_eq!(
        Notifier::<MemoryTransport>::format_attribute(&value),
        format_attribute(&value)
    );
}

#[test]
fn supported_values_round_trip() {
    let values = [
        AttributeValue::Integer(42),
        AttributeValue::Float(0.25),
        AttributeValue::Float(10.0),
        AttributeValue::String("plain".to_owned()),
        AttributeValue::StringArray(vec!["z".to_owned(), "a".to_owned(), "z".to_owned()]),
        AttributeValue::StringArray(Vec::new()),
    ];

    for value in values {
        let decoded = parse_attribute(&format_attribute(&value)).unwrap();

        assert_eq!(decoded, value);
        assert_eq!(
            std::mem::discriminant(&decoded),
            std::mem::discriminant(&value)
        );
    }
}
