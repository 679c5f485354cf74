use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Local push-notification authorization state.
///
/// `Unsupported` and `Denied` are terminal from application code; recovery
/// from `Denied` requires a platform-level settings change by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Unsupported,
    Default,
    Denied,
    Granted,
}

/// The unit delivered through either push route (direct or worker relay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushEnvelope {
    pub title: String,
    pub body: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,
}

impl PushEnvelope {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: None,
            tag: None,
            data: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Which route actually carried a delivered notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryRoute {
    Direct,
    WorkerRelay,
}

/// Returned to the caller on successful dispatch. Either route counts.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationHandle {
    pub tag: Option<String>,
    pub route: DeliveryRoute,
}

/// A user interaction with a visible notification. The only consumer
/// foregrounds the host window and dismisses; no business logic.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEvent {
    pub tag: Option<String>,
}
