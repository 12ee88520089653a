use serde::{Deserialize, Serialize};

/// The outcome of provisioning a subscription on a topic.
///
/// Some protocols (e.g. `email`) require the endpoint owner to confirm the subscription, in
/// which case the remote service does not hand out an identifier straight away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscription {
    pub subscription_arn: Option<String>,
}

impl Subscription {
    pub fn confirmed(arn: impl Into<String>) -> Self {
        Self {
            subscription_arn: Some(arn.into()),
        }
    }

    pub fn pending_confirmation() -> Self {
        Self {
            subscription_arn: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.subscription_arn.is_none()
    }
}
