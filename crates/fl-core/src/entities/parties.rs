use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// Customer a ticket belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub id: u64,
    pub company_name: String,
}

/// Installed equipment the ticket concerns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    pub id: u64,
    #[serde(default)]
    pub serial_no: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Customer-side contact person.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRef {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Service zone grouping customers and service persons.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRef {
    pub id: u64,
    pub name: String,
}

/// A user as embedded in tickets and activities.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}
