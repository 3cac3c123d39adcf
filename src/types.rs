use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::fmt;

// UTILS
fn rfc3339<S>(timestamp: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339())
}

// KEY SCHEMAS ================================================================
/// The backing service a required key configures.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Database,
    Payments,
}

impl Service {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Database => "database",
            Service::Payments => "payments",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration key that must be set before startup continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredKey {
    pub name: &'static str,
    pub service: Service,
}

impl RequiredKey {
    #[must_use]
    pub const fn new(name: &'static str, service: Service) -> Self {
        RequiredKey { name, service }
    }
}

// REPORT SCHEMAS =============================================================
/// Presence of one required key. Never carries the value itself.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyStatus {
    pub key: String,
    pub service: Service,
    pub present: bool,
}

impl KeyStatus {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.present {
            "set"
        } else {
            "missing"
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct EnvReport {
    #[serde(serialize_with = "rfc3339")]
    pub checked_at: DateTime<Local>,
    pub keys: Vec<KeyStatus>,
}

impl EnvReport {
    /// Keys that are unset or empty, in declaration order.
    #[must_use]
    pub fn missing(&self) -> Vec<String> {
        self.keys
            .iter()
            .filter(|status| !status.present)
            .map(|status| status.key.clone())
            .collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.keys.iter().all(|status| status.present)
    }
}
