//! Relevance classification for status-page events.
//!
//! Decides whether an event is worth alerting on and why: either it
//! mentions the tracked region, or (incidents only) it is service-wide.
//! Rules run in a fixed order and the first hit wins. Every text source is
//! optional; absent fields are treated as empty and never error.

use serde::Serialize;

use crate::config::KeywordConfig;
use crate::event::{Event, Incident, Maintenance};
use crate::matcher::text_mentions;

/// Why an event is (or is not) alert-worthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Relevance {
    /// The event concerns the tracked datacenter region.
    RegionMatch,
    /// The event affects the whole platform regardless of region.
    ServiceWide,
    /// The event is not relevant.
    None,
}

/// Outcome of classifying one event.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Whether an alert should be delivered.
    pub alert: bool,
    /// Match category driving header wording.
    pub relevance: Relevance,
    /// Human-readable explanation, written to the operational log.
    pub reason: String,
}

impl Classification {
    fn region(reason: String) -> Self {
        Self {
            alert: true,
            relevance: Relevance::RegionMatch,
            reason,
        }
    }

    fn service_wide(reason: String) -> Self {
        Self {
            alert: true,
            relevance: Relevance::ServiceWide,
            reason,
        }
    }

    fn not_relevant(reason: String) -> Self {
        Self {
            alert: false,
            relevance: Relevance::None,
            reason,
        }
    }
}

/// Classify one event against the configured keyword sets.
pub fn classify(event: &Event, keywords: &KeywordConfig) -> Classification {
    match event {
        Event::Incident(incident) => classify_incident(incident, keywords),
        Event::Component { component, .. } => {
            let name = component.name.as_deref().unwrap_or_default();
            if text_mentions(name, &keywords.region) {
                Classification::region(format!(
                    "{} component update: {}",
                    keywords.region_name, name
                ))
            } else {
                Classification::not_relevant(format!(
                    "component update not {} related: {}",
                    keywords.region_name, name
                ))
            }
        }
        Event::Maintenance(maintenance) => classify_maintenance(maintenance, keywords),
    }
}

fn classify_incident(incident: &Incident, keywords: &KeywordConfig) -> Classification {
    let name = incident.name.as_deref().unwrap_or_default();

    if text_mentions(name, &keywords.region) {
        return Classification::region(format!(
            "{} incident detected (name match): {}",
            keywords.region_name, name
        ));
    }

    for update in &incident.incident_updates {
        if text_mentions(update.text(), &keywords.region) {
            return Classification::region(format!(
                "{} incident detected (update match): {}",
                keywords.region_name, name
            ));
        }
    }

    if incident
        .affected()
        .any(|component| text_mentions(component.name(), &keywords.region))
    {
        return Classification::region(format!(
            "{} incident detected (component match): {}",
            keywords.region_name, name
        ));
    }

    let impact = incident.impact.as_deref().unwrap_or_default();
    if text_mentions(&incident_text(incident), &keywords.service_wide) {
        return Classification::service_wide(format!(
            "service-wide incident detected (keyword match): {}",
            name
        ));
    }
    if impact.eq_ignore_ascii_case("critical") {
        return Classification::service_wide(format!(
            "service-wide incident detected (critical impact): {}",
            name
        ));
    }

    Classification::not_relevant(format!("incident not relevant: {}", name))
}

fn classify_maintenance(maintenance: &Maintenance, keywords: &KeywordConfig) -> Classification {
    let name = maintenance.name.as_deref().unwrap_or_default();

    let mut text = String::new();
    text.push_str(name);
    text.push(' ');
    text.push_str(maintenance.description.as_deref().unwrap_or_default());
    for update in maintenance.updates() {
        text.push(' ');
        text.push_str(update.text());
    }

    if text_mentions(&text, &keywords.region) {
        Classification::region(format!(
            "{} maintenance detected: {}",
            keywords.region_name, name
        ))
    } else {
        // Maintenance never escalates to service-wide.
        Classification::not_relevant(format!(
            "maintenance not {} related: {}",
            keywords.region_name, name
        ))
    }
}

/// All incident text consulted by the service-wide check.
fn incident_text(incident: &Incident) -> String {
    let mut text = String::new();
    text.push_str(incident.name.as_deref().unwrap_or_default());
    text.push(' ');
    text.push_str(incident.impact.as_deref().unwrap_or_default());
    for update in &incident.incident_updates {
        text.push(' ');
        text.push_str(update.text());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Component, ComponentStatusChange, WebhookPayload};

    fn keywords() -> KeywordConfig {
        KeywordConfig::default()
    }

    fn incident_event(raw: &str) -> Event {
        serde_json::from_str::<WebhookPayload>(raw)
            .unwrap()
            .into_event()
            .unwrap()
    }

    #[test]
    fn incident_name_match_is_region() {
        let event = incident_event(r#"{"incident": {"name": "NY-3 registration failures"}}"#);
        let result = classify(&event, &keywords());
        assert!(result.alert);
        assert_eq!(result.relevance, Relevance::RegionMatch);
        assert!(result.reason.contains("name match"));
    }

    #[test]
    fn incident_update_match_scans_all_updates() {
        // The region signal sits at index 2, not index 0.
        let event = incident_event(
            r#"{"incident": {
                "name": "Voice degradation",
                "incident_updates": [
                    {"body": "Investigating"},
                    {"body": "Narrowed down to one site"},
                    {"body": "Affected site is new york"}
                ]
            }}"#,
        );
        let result = classify(&event, &keywords());
        assert!(result.alert);
        assert_eq!(result.relevance, Relevance::RegionMatch);
        assert!(result.reason.contains("update match"));
    }

    #[test]
    fn incident_component_match_checks_both_lists() {
        let event = incident_event(
            r#"{"incident": {
                "name": "Partial outage",
                "components": ["Chicago Core"],
                "affected_components": [{"name": "NY-4 Media"}]
            }}"#,
        );
        let result = classify(&event, &keywords());
        assert!(result.alert);
        assert_eq!(result.relevance, Relevance::RegionMatch);
        assert!(result.reason.contains("component match"));
    }

    #[test]
    fn critical_impact_alone_escalates_to_service_wide() {
        let event = incident_event(
            r#"{"incident": {"name": "Carrier interconnect fault", "impact": "Critical"}}"#,
        );
        let result = classify(&event, &keywords());
        assert!(result.alert);
        assert_eq!(result.relevance, Relevance::ServiceWide);
        assert!(result.reason.contains("critical impact"));
    }

    #[test]
    fn service_wide_keyword_in_update_body_escalates() {
        let event = incident_event(
            r#"{"incident": {
                "name": "Elevated error rates",
                "incident_updates": [{"body": "Mitigating a ddos attack"}]
            }}"#,
        );
        let result = classify(&event, &keywords());
        assert!(result.alert);
        assert_eq!(result.relevance, Relevance::ServiceWide);
    }

    #[test]
    fn region_match_wins_over_service_wide() {
        let event = incident_event(
            r#"{"incident": {"name": "NYC billing maintenance", "impact": "critical"}}"#,
        );
        let result = classify(&event, &keywords());
        assert_eq!(result.relevance, Relevance::RegionMatch);
    }

    #[test]
    fn unrelated_incident_is_dropped() {
        let event =
            incident_event(r#"{"incident": {"name": "Houston packet loss", "impact": "minor"}}"#);
        let result = classify(&event, &keywords());
        assert!(!result.alert);
        assert_eq!(result.relevance, Relevance::None);
    }

    #[test]
    fn incident_with_no_fields_is_dropped_without_error() {
        let event = incident_event(r#"{"incident": {}}"#);
        let result = classify(&event, &keywords());
        assert!(!result.alert);
        assert_eq!(result.relevance, Relevance::None);
    }

    #[test]
    fn component_update_matches_on_name_only() {
        let event = Event::Component {
            component: Component {
                name: Some("NY-2 Gateway".to_string()),
            },
            change: ComponentStatusChange::default(),
            page_url: None,
        };
        let result = classify(&event, &keywords());
        assert!(result.alert);
        assert_eq!(result.relevance, Relevance::RegionMatch);
    }

    #[test]
    fn component_update_has_no_service_wide_fallback() {
        // "major outage" is a service-wide keyword, but component updates
        // only consult the component name.
        let event = Event::Component {
            component: Component {
                name: Some("Dallas Gateway major outage".to_string()),
            },
            change: ComponentStatusChange::default(),
            page_url: None,
        };
        let result = classify(&event, &keywords());
        assert!(!result.alert);
    }

    #[test]
    fn maintenance_matches_across_name_description_and_updates() {
        let event = incident_event(
            r#"{"maintenance": {
                "name": "Switch firmware upgrade",
                "description": "Routine work",
                "maintenance_updates": [{"body": "Window covers NY-5 only"}]
            }}"#,
        );
        let result = classify(&event, &keywords());
        assert!(result.alert);
        assert_eq!(result.relevance, Relevance::RegionMatch);
    }

    #[test]
    fn unrelated_maintenance_is_dropped_not_escalated() {
        let event = incident_event(
            r#"{"maintenance": {
                "name": "Billing system maintenance",
                "description": "platform-wide window"
            }}"#,
        );
        // Service-wide keywords are present but maintenance never escalates.
        let result = classify(&event, &keywords());
        assert!(!result.alert);
        assert_eq!(result.relevance, Relevance::None);
    }
}
