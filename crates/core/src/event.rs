//! Status-page webhook payload model.
//!
//! Upstream payloads are loosely structured: every field may be absent,
//! several concepts arrive under two different key spellings, and affected
//! components can be bare strings or objects with a `name` key. The serde
//! model here accepts every observed shape and defaults the rest, so the
//! classifier and formatter never see a hard parse failure.

use serde::Deserialize;

/// Raw webhook payload. Exactly one of the top-level event keys is
/// expected; if none is present the payload is inert.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookPayload {
    pub incident: Option<Incident>,
    pub component: Option<Component>,
    pub component_update: Option<ComponentStatusChange>,
    pub maintenance: Option<Maintenance>,
    pub page: Option<Page>,
}

/// One event extracted from a webhook payload.
///
/// Keys are checked in upstream order: incident first, then component,
/// then maintenance.
#[derive(Debug, Clone)]
pub enum Event {
    /// A status-page incident.
    Incident(Incident),
    /// A component status transition.
    Component {
        component: Component,
        change: ComponentStatusChange,
        page_url: Option<String>,
    },
    /// A scheduled maintenance notice.
    Maintenance(Maintenance),
}

impl WebhookPayload {
    /// Convert the payload into its event, if it carries one.
    pub fn into_event(self) -> Option<Event> {
        if let Some(incident) = self.incident {
            return Some(Event::Incident(incident));
        }
        if let Some(component) = self.component {
            return Some(Event::Component {
                component,
                change: self.component_update.unwrap_or_default(),
                page_url: self.page.and_then(|p| p.url),
            });
        }
        self.maintenance.map(Event::Maintenance)
    }
}

/// Status-page incident.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub name: Option<String>,
    /// Free-text severity label ("critical", "major", "minor", "none").
    pub impact: Option<String>,
    /// Free-text lifecycle label ("investigating", "monitoring", "resolved").
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub url: Option<String>,
    /// Incident updates, most recent first.
    pub incident_updates: Vec<Update>,
    pub components: Vec<ComponentRef>,
    pub affected_components: Vec<ComponentRef>,
}

impl Incident {
    /// Affected components, merged from both source lists. Duplicates are
    /// not removed; only a boolean match is ever taken from this.
    pub fn affected(&self) -> impl Iterator<Item = &ComponentRef> {
        self.components.iter().chain(self.affected_components.iter())
    }
}

/// One update entry in an incident or maintenance timeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Update {
    pub body: Option<String>,
}

impl Update {
    /// Update body, empty when absent.
    pub fn text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Component as referenced from an incident: either a bare name string or
/// an object carrying a `name` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ComponentRef {
    Named(Component),
    Plain(String),
}

impl ComponentRef {
    /// Component name, empty when absent.
    pub fn name(&self) -> &str {
        match self {
            ComponentRef::Named(component) => component.name.as_deref().unwrap_or_default(),
            ComponentRef::Plain(name) => name,
        }
    }
}

/// Component in a component-update event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Component {
    pub name: Option<String>,
}

/// Status transition attached to a component-update event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ComponentStatusChange {
    /// New status value (MAJOROUTAGE, PARTIALOUTAGE, DEGRADEDPERFORMANCE,
    /// OPERATIONAL, UNDERMAINTENANCE, or unknown).
    pub new_status: Option<String>,
    pub created_at: Option<String>,
}

/// Enclosing status page reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Page {
    pub url: Option<String>,
}

/// Scheduled maintenance notice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Maintenance {
    pub name: Option<String>,
    pub description: Option<String>,
    /// SCHEDULED, INPROGRESS, IN_PROGRESS, VERIFYING, COMPLETED (case
    /// insensitive), or unknown.
    pub status: Option<String>,
    pub scheduled_for: Option<String>,
    pub scheduled_start_time: Option<String>,
    pub scheduled_until: Option<String>,
    pub scheduled_end_time: Option<String>,
    pub url: Option<String>,
    pub maintenance_updates: Vec<Update>,
    /// Some upstream payloads reuse the incident key for maintenance
    /// updates.
    pub incident_updates: Vec<Update>,
}

impl Maintenance {
    /// Scheduled start, whichever spelling the payload used.
    pub fn scheduled_start(&self) -> Option<&str> {
        self.scheduled_for
            .as_deref()
            .or(self.scheduled_start_time.as_deref())
    }

    /// Scheduled end, whichever spelling the payload used.
    pub fn scheduled_end(&self) -> Option<&str> {
        self.scheduled_until
            .as_deref()
            .or(self.scheduled_end_time.as_deref())
    }

    /// All updates, `maintenance_updates` first, in listed order.
    pub fn updates(&self) -> impl Iterator<Item = &Update> {
        self.maintenance_updates
            .iter()
            .chain(self.incident_updates.iter())
    }
}
