//! Notification formatting for relevant events.
//!
//! Turns an event into an ordered, colored, multi-section message body.
//! Formatting is a pure transformation: calling it twice on the same input
//! yields structurally identical output. Field rows always render, with a
//! literal "N/A" standing in for missing values; only the trailing
//! latest-update and link sections are conditional.

use serde::Serialize;

use crate::classify::Relevance;
use crate::event::{Component, ComponentStatusChange, Event, Incident, Maintenance};

/// One formatted chat notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Ordered message sections.
    pub sections: Vec<Section>,
    /// Severity accent color (hex), rendered as the message border.
    pub accent_color: String,
}

/// One section of a formatted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Section {
    /// Plain-text header line, severity emoji included.
    Header(String),
    /// Group of labeled field rows.
    Fields(Vec<Field>),
    /// Free-form mrkdwn text block.
    Text(String),
}

/// One labeled field row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// Format one relevant event into a message.
///
/// Selection is keyed on the event variant; `relevance` only toggles the
/// incident header wording between service-wide and region phrasing.
pub fn format_event(event: &Event, relevance: Relevance, region_name: &str) -> Message {
    match event {
        Event::Incident(incident) => {
            format_incident(incident, relevance == Relevance::ServiceWide, region_name)
        }
        Event::Component {
            component,
            change,
            page_url,
        } => format_component(component, change, page_url.as_deref(), region_name),
        Event::Maintenance(maintenance) => format_maintenance(maintenance),
    }
}

fn format_incident(incident: &Incident, service_wide: bool, region_name: &str) -> Message {
    let impact = incident.impact.as_deref().unwrap_or_default().to_lowercase();
    let status = incident.status.as_deref().unwrap_or_default().to_lowercase();

    // Priority order matters: critical/major/outage first.
    let (emoji, color) = if impact == "critical" || impact == "major" || status.contains("outage") {
        ("🔴", "#d63031")
    } else if impact == "minor" || status == "monitoring" {
        ("🟡", "#fdcb6e")
    } else if status == "resolved" {
        ("🟢", "#00b894")
    } else {
        ("🔵", "#0984e3")
    };

    let header = if service_wide {
        format!("{} Service-Wide Alert", emoji)
    } else {
        format!("{} {} Server Incident", emoji, region_name)
    };

    let mut sections = vec![
        Section::Header(header),
        Section::Fields(vec![
            Field::new("Incident", incident.name.as_deref().unwrap_or("N/A")),
            Field::new("Status", upper_or_na(incident.status.as_deref())),
            Field::new("Impact", upper_or_na(incident.impact.as_deref())),
            Field::new("Created", incident.created_at.as_deref().unwrap_or("N/A")),
        ]),
    ];

    // Latest update is always element 0; upstream orders newest first.
    let latest = incident
        .incident_updates
        .first()
        .map(|update| update.text())
        .unwrap_or_default();
    if !latest.is_empty() {
        sections.push(Section::Text(format!("*Latest Update:*\n{}", latest)));
    }

    if let Some(url) = non_empty(incident.url.as_deref()) {
        sections.push(Section::Text(format!("<{}|View Incident Details>", url)));
    }

    Message {
        sections,
        accent_color: color.to_string(),
    }
}

fn format_component(
    component: &Component,
    change: &ComponentStatusChange,
    page_url: Option<&str>,
    region_name: &str,
) -> Message {
    let status = change.new_status.as_deref().unwrap_or("UNKNOWN");

    let (emoji, color) = match status {
        "MAJOROUTAGE" => ("🔴", "#d63031"),
        "PARTIALOUTAGE" => ("🟠", "#e17055"),
        "DEGRADEDPERFORMANCE" => ("🟡", "#fdcb6e"),
        "OPERATIONAL" => ("🟢", "#00b894"),
        "UNDERMAINTENANCE" => ("🔵", "#0984e3"),
        _ => ("⚪", "#636e72"),
    };

    let mut sections = vec![
        Section::Header(format!("{} {} Server Component Update", emoji, region_name)),
        Section::Fields(vec![
            Field::new("Component", component.name.as_deref().unwrap_or("N/A")),
            Field::new("Status", status.replace('_', " ")),
            Field::new("Updated", change.created_at.as_deref().unwrap_or("N/A")),
        ]),
    ];

    if let Some(url) = non_empty(page_url) {
        sections.push(Section::Text(format!("<{}|View Status Page>", url)));
    }

    Message {
        sections,
        accent_color: color.to_string(),
    }
}

fn format_maintenance(maintenance: &Maintenance) -> Message {
    let status = maintenance
        .status
        .as_deref()
        .unwrap_or("SCHEDULED")
        .to_uppercase();

    let (emoji, color) = match status.as_str() {
        "SCHEDULED" => ("🔵", "#0984e3"),
        "INPROGRESS" | "IN_PROGRESS" => ("🟠", "#e17055"),
        "VERIFYING" => ("🟡", "#fdcb6e"),
        "COMPLETED" => ("🟢", "#00b894"),
        _ => ("🔵", "#0984e3"),
    };

    let mut sections = vec![
        Section::Header(format!("{} Scheduled Maintenance Alert", emoji)),
        Section::Fields(vec![
            Field::new("Maintenance", maintenance.name.as_deref().unwrap_or("N/A")),
            Field::new("Status", status.clone()),
            Field::new(
                "Scheduled Start",
                maintenance.scheduled_start().unwrap_or("N/A"),
            ),
            Field::new(
                "Scheduled End",
                maintenance.scheduled_end().unwrap_or("N/A"),
            ),
        ]),
    ];

    let details = maintenance
        .updates()
        .next()
        .map(|update| update.text())
        .unwrap_or_default();
    if !details.is_empty() {
        sections.push(Section::Text(format!("*Details:*\n{}", details)));
    }

    if let Some(url) = non_empty(maintenance.url.as_deref()) {
        sections.push(Section::Text(format!(
            "<{}|View Maintenance Details>",
            url
        )));
    }

    Message {
        sections,
        accent_color: color.to_string(),
    }
}

fn upper_or_na(value: Option<&str>) -> String {
    value.map(str::to_uppercase).unwrap_or_else(|| "N/A".to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
