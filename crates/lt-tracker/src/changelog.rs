//! Jira issue changelog responses.
//!
//! `GET /rest/api/2/issue/{key}?expand=changelog` embeds the history as a
//! list of change groups, each with one or more field changes. Only changes
//! to the `status` field become [`StatusChangeEvent`]s.

use lt_core::StatusChangeEvent;

use crate::error::TrackerError;

/// Jira field name carrying workflow status changes.
const STATUS_FIELD: &str = "status";

#[derive(serde::Deserialize)]
pub(crate) struct IssueResponse {
    pub(crate) key: String,
    #[serde(default)]
    changelog: Option<Changelog>,
}

#[derive(serde::Deserialize)]
struct Changelog {
    #[serde(default)]
    total: Option<usize>,
    #[serde(default)]
    histories: Vec<History>,
}

#[derive(serde::Deserialize)]
struct History {
    created: String,
    #[serde(default)]
    items: Vec<ChangeItem>,
}

#[derive(serde::Deserialize)]
struct ChangeItem {
    field: String,
    #[serde(rename = "fromString", default)]
    from_name: Option<String>,
    #[serde(rename = "toString", default)]
    to_name: Option<String>,
}

#[derive(serde::Deserialize)]
pub(crate) struct Myself {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "displayName", default)]
    pub(crate) display_name: Option<String>,
}

/// Flatten an issue's changelog into status-change events, in the order the
/// tracker listed them.
///
/// # Errors
///
/// Returns [`TrackerError::Parse`] if a change group carries a timestamp that
/// does not start with a valid date.
pub(crate) fn status_events(issue: IssueResponse) -> Result<Vec<StatusChangeEvent>, TrackerError> {
    let Some(changelog) = issue.changelog else {
        tracing::debug!(issue = %issue.key, "response carried no changelog");
        return Ok(Vec::new());
    };

    if let Some(total) = changelog.total
        && total > changelog.histories.len()
    {
        tracing::warn!(
            issue = %issue.key,
            total,
            returned = changelog.histories.len(),
            "changelog truncated by the tracker; milestones use the returned entries only"
        );
    }

    let mut events = Vec::new();
    for history in changelog.histories {
        for item in history.items {
            if item.field != STATUS_FIELD {
                continue;
            }
            events.push(StatusChangeEvent::from_raw_timestamp(
                &history.created,
                item.from_name,
                item.to_name,
            )?);
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "key": "PROJ-1",
        "fields": { "summary": "Example" },
        "changelog": {
            "startAt": 0,
            "maxResults": 3,
            "total": 3,
            "histories": [
                {
                    "id": "100",
                    "created": "2024-01-01T09:15:00.000+0000",
                    "items": [
                        { "field": "status", "fieldtype": "jira", "from": "1", "fromString": "To Do", "to": "3", "toString": "In Progress" }
                    ]
                },
                {
                    "id": "101",
                    "created": "2024-01-05T10:00:00.000+0000",
                    "items": [
                        { "field": "assignee", "fieldtype": "jira", "fromString": null, "toString": "Jane" },
                        { "field": "status", "fieldtype": "jira", "fromString": "In Progress", "toString": "Blocked" }
                    ]
                },
                {
                    "id": "102",
                    "created": "2024-01-11T16:45:00.000+0000",
                    "items": [
                        { "field": "status", "fieldtype": "jira", "fromString": "Blocked", "toString": "Done" }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn parse_issue_response() {
        let issue: IssueResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(issue.key, "PROJ-1");
        let changelog = issue.changelog.unwrap();
        assert_eq!(changelog.total, Some(3));
        assert_eq!(changelog.histories.len(), 3);
        assert_eq!(changelog.histories[1].items.len(), 2);
    }

    #[test]
    fn only_status_changes_become_events() {
        let issue: IssueResponse = serde_json::from_str(FIXTURE).unwrap();
        let events = status_events(issue).unwrap();

        let statuses: Vec<_> = events
            .iter()
            .map(|e| (e.from_status(), e.to_status()))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (Some("To Do"), Some("In Progress")),
                (Some("In Progress"), Some("Blocked")),
                (Some("Blocked"), Some("Done")),
            ]
        );
        assert_eq!(events[2].raw_timestamp(), "2024-01-11T16:45:00.000+0000");
        assert_eq!(events[2].occurred_at().to_string(), "2024-01-11");
    }

    #[test]
    fn missing_changelog_yields_no_events() {
        let issue: IssueResponse = serde_json::from_str(r#"{ "key": "PROJ-2" }"#).unwrap();
        assert!(status_events(issue).unwrap().is_empty());
    }

    #[test]
    fn null_status_names_are_kept_absent() {
        let json = r#"{
            "key": "PROJ-3",
            "changelog": { "histories": [
                { "created": "2024-02-01T00:00:00.000+0000",
                  "items": [ { "field": "status", "fromString": null } ] }
            ] }
        }"#;
        let issue: IssueResponse = serde_json::from_str(json).unwrap();
        let events = status_events(issue).unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].from_status().is_none());
        assert!(events[0].to_status().is_none());
    }

    #[test]
    fn bad_timestamp_is_a_parse_error() {
        let json = r#"{
            "key": "PROJ-4",
            "changelog": { "histories": [
                { "created": "yesterday",
                  "items": [ { "field": "status", "toString": "Done" } ] }
            ] }
        }"#;
        let issue: IssueResponse = serde_json::from_str(json).unwrap();
        let err = status_events(issue).unwrap_err();
        assert!(matches!(err, TrackerError::Parse(_)));
    }

    #[test]
    fn bad_timestamp_on_other_fields_is_ignored() {
        let json = r#"{
            "key": "PROJ-5",
            "changelog": { "histories": [
                { "created": "yesterday",
                  "items": [ { "field": "priority", "toString": "High" } ] }
            ] }
        }"#;
        let issue: IssueResponse = serde_json::from_str(json).unwrap();
        assert!(status_events(issue).unwrap().is_empty());
    }

    #[test]
    fn parse_myself_response() {
        let me: Myself =
            serde_json::from_str(r#"{ "name": "jdoe", "displayName": "Jane Doe", "active": true }"#)
                .unwrap();
        assert_eq!(me.name.as_deref(), Some("jdoe"));
        assert_eq!(me.display_name.as_deref(), Some("Jane Doe"));
    }
}
