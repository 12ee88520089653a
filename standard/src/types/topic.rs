use crate::errors::ValidationError;
use serde::Serialize;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Every topic identifier accepted as a recipient must start with this prefix.
pub const ARN_PREFIX: &str = "arn:aws:";

/// A validated topic identifier.
///
/// The only check performed is that the identifier begins with [ARN_PREFIX]; region, account
/// and topic name are left for the remote service to judge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TopicArn(String);

impl TopicArn {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.starts_with(ARN_PREFIX) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidRecipient(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for TopicArn {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for TopicArn {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for TopicArn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for TopicArn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TopicArn {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TopicArn {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for TopicArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
