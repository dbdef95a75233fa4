use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::parties::UserRef;
use crate::entities::ticket::TicketId;
use crate::enums::{ActivityKind, TicketStatus};
use crate::errors::CoreError;

/// GPS fix attached to an activity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
}

impl GeoPoint {
    /// Build a point, rejecting coordinates outside the WGS84 ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let point = Self {
            latitude,
            longitude,
            address: None,
        };
        point.validate()?;
        Ok(point)
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for out-of-range or non-finite values.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoreError::Validation(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoreError::Validation(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// An append-only log entry recording a status change or note on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u64,
    pub ticket_id: TicketId,
    pub user: UserRef,
    pub kind: ActivityKind,
    #[serde(default)]
    pub from_status: Option<TicketStatus>,
    #[serde(default)]
    pub to_status: Option<TicketStatus>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub created_at: DateTime<Utc>,
}

/// Audit trail for one ticket, oldest first.
///
/// Entries can only be appended. There is no API to edit or remove one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityTrail {
    entries: Vec<Activity>,
}

impl ActivityTrail {
    /// Build a trail from fetched entries. Order is by `created_at`; entries
    /// with equal timestamps keep their arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if any entry carries an invalid
    /// location or the entries span more than one ticket.
    pub fn from_entries(mut entries: Vec<Activity>) -> Result<Self, CoreError> {
        for entry in &entries {
            if let Some(location) = &entry.location {
                location.validate().map_err(|error| {
                    CoreError::Validation(format!("activity {}: {error}", entry.id))
                })?;
            }
        }
        if let Some(first) = entries.first()
            && let Some(stray) = entries.iter().find(|e| e.ticket_id != first.ticket_id)
        {
            return Err(CoreError::Validation(format!(
                "activity {} belongs to ticket {}, trail is for ticket {}",
                stray.id, stray.ticket_id, first.ticket_id
            )));
        }
        entries.sort_by_key(|entry| entry.created_at);
        Ok(Self { entries })
    }

    /// Append a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the entry belongs to another ticket
    /// than the rest of the trail, predates the newest entry, or carries an
    /// invalid location.
    pub fn append(&mut self, entry: Activity) -> Result<(), CoreError> {
        if let Some(location) = &entry.location {
            location.validate()?;
        }
        if let Some(last) = self.entries.last() {
            if last.ticket_id != entry.ticket_id {
                return Err(CoreError::Validation(format!(
                    "activity {} belongs to ticket {}, trail is for ticket {}",
                    entry.id, entry.ticket_id, last.ticket_id
                )));
            }
            if entry.created_at < last.created_at {
                return Err(CoreError::Validation(format!(
                    "activity {} predates the newest entry",
                    entry.id
                )));
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Activity> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Activity] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn entry(id: u64, ticket_id: TicketId, at: DateTime<Utc>) -> Activity {
        Activity {
            id,
            ticket_id,
            user: UserRef {
                id: 7,
                name: Some("Ravi".into()),
                email: None,
                role: None,
            },
            kind: ActivityKind::Note,
            from_status: None,
            to_status: None,
            description: Some(format!("entry {id}")),
            location: None,
            created_at: at,
        }
    }

    #[test]
    fn from_entries_sorts_oldest_first() {
        let now = Utc::now();
        let trail = ActivityTrail::from_entries(vec![
            entry(2, 1, now),
            entry(1, 1, now - TimeDelta::minutes(5)),
        ])
        .unwrap();
        let ids: Vec<u64> = trail.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(trail.latest().map(|a| a.id), Some(2));
    }

    #[test]
    fn append_rejects_older_entry() {
        let now = Utc::now();
        let mut trail = ActivityTrail::from_entries(vec![entry(1, 1, now)]).unwrap();
        let err = trail
            .append(entry(2, 1, now - TimeDelta::seconds(1)))
            .unwrap_err();
        assert!(err.to_string().contains("predates"));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn append_rejects_foreign_ticket() {
        let now = Utc::now();
        let mut trail = ActivityTrail::from_entries(vec![entry(1, 1, now)]).unwrap();
        assert!(trail.append(entry(2, 99, now)).is_err());
    }

    #[test]
    fn append_accepts_same_timestamp() {
        let now = Utc::now();
        let mut trail = ActivityTrail::default();
        trail.append(entry(1, 1, now)).unwrap();
        trail.append(entry(2, 1, now)).unwrap();
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn from_entries_rejects_out_of_range_location() {
        let now = Utc::now();
        let mut bad = entry(3, 1, now);
        bad.location = Some(GeoPoint {
            latitude: 999.0,
            longitude: 0.0,
            address: None,
        });
        let err = ActivityTrail::from_entries(vec![entry(1, 1, now), bad]).unwrap_err();
        assert!(err.to_string().contains("activity 3"));
        assert!(err.to_string().contains("latitude 999"));
    }

    #[test]
    fn from_entries_rejects_mixed_tickets() {
        let now = Utc::now();
        assert!(ActivityTrail::from_entries(vec![entry(1, 1, now), entry(2, 8, now)]).is_err());
    }

    #[test]
    fn geo_point_rejects_out_of_range() {
        assert!(GeoPoint::new(12.97, 77.59).is_ok());
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }
}
