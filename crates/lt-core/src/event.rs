//! A single observed status transition.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Date layout of the leading part of a changelog timestamp.
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// One status transition recorded in an issue's changelog.
///
/// Only the calendar day is kept for comparisons; the original timestamp is
/// retained verbatim in [`raw_timestamp`](Self::raw_timestamp). Trackers do
/// not promise to yield events chronologically, so nothing in this crate
/// assumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChangeEvent {
    occurred_at: NaiveDate,
    from_status: Option<String>,
    to_status: Option<String>,
    raw_timestamp: String,
}

impl StatusChangeEvent {
    #[must_use]
    pub fn new(
        occurred_at: NaiveDate,
        from_status: Option<String>,
        to_status: Option<String>,
        raw_timestamp: impl Into<String>,
    ) -> Self {
        Self {
            occurred_at,
            from_status,
            to_status,
            raw_timestamp: raw_timestamp.into(),
        }
    }

    /// Build an event from a tracker timestamp such as
    /// `2024-01-11T09:30:00.000+0000`.
    ///
    /// Everything from the first `T` onward is discarded before parsing, so a
    /// bare `2024-01-11` is accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimestamp`] if the date part is not a
    /// valid `YYYY-MM-DD` calendar date.
    pub fn from_raw_timestamp(
        raw_timestamp: &str,
        from_status: Option<String>,
        to_status: Option<String>,
    ) -> Result<Self, CoreError> {
        let date_part = raw_timestamp
            .split_once('T')
            .map_or(raw_timestamp, |(date, _)| date);
        let occurred_at = NaiveDate::parse_from_str(date_part.trim(), DATE_LAYOUT).map_err(
            |error| CoreError::InvalidTimestamp {
                raw: raw_timestamp.to_string(),
                reason: error.to_string(),
            },
        )?;
        Ok(Self::new(occurred_at, from_status, to_status, raw_timestamp))
    }

    #[must_use]
    pub const fn occurred_at(&self) -> NaiveDate {
        self.occurred_at
    }

    #[must_use]
    pub fn from_status(&self) -> Option<&str> {
        self.from_status.as_deref()
    }

    #[must_use]
    pub fn to_status(&self) -> Option<&str> {
        self.to_status.as_deref()
    }

    #[must_use]
    pub fn raw_timestamp(&self) -> &str {
        &self.raw_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn time_of_day_is_discarded() {
        let event = StatusChangeEvent::from_raw_timestamp(
            "2024-01-11T23:59:59.999+0100",
            Some("In Progress".into()),
            Some("Done".into()),
        )
        .unwrap();

        assert_eq!(
            event.occurred_at(),
            NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()
        );
        assert_eq!(event.raw_timestamp(), "2024-01-11T23:59:59.999+0100");
        assert_eq!(event.from_status(), Some("In Progress"));
        assert_eq!(event.to_status(), Some("Done"));
    }

    #[test]
    fn bare_date_is_accepted() {
        let event = StatusChangeEvent::from_raw_timestamp("2024-02-29", None, None).unwrap();
        assert_eq!(
            event.occurred_at(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(event.to_status().is_none());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err = StatusChangeEvent::from_raw_timestamp("11/01/2024 10:00", None, None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTimestamp { ref raw, .. } if raw == "11/01/2024 10:00"));
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let err = StatusChangeEvent::from_raw_timestamp("2023-02-29T00:00:00", None, None);
        assert!(err.is_err());
    }
}
