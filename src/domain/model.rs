use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical page identifier taken from the URL fragment, e.g. `/about`.
///
/// Any string is a valid route; only the five values in [`Page::ALL`] map to
/// a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route(String);

impl Route {
    pub const ROOT: &'static str = "/";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// Derives a route from a raw fragment such as `#/track`. A missing or
    /// empty fragment resolves to the root route.
    pub fn from_fragment(fragment: &str) -> Self {
        let value = fragment.strip_prefix('#').unwrap_or(fragment);
        if value.is_empty() {
            Self::root()
        } else {
            Self(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Route {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Services,
    Track,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Track,
        Page::Contact,
    ];

    pub fn route_path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Track => "/track",
            Page::Contact => "/contact",
        }
    }

    pub fn route(self) -> Route {
        Route::new(self.route_path())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Track => "Track",
            Page::Contact => "Contact",
        }
    }

    /// File stem used when exporting the site as static files.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::About => "about",
            Page::Services => "services",
            Page::Track => "track",
            Page::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Every submission may start from any state, including `Sending`
    /// (double submits are not blocked). Outcomes only follow `Sending`.
    pub fn can_transition_to(self, next: SubmissionStatus) -> bool {
        match next {
            SubmissionStatus::Idle => false,
            SubmissionStatus::Sending => true,
            SubmissionStatus::Success | SubmissionStatus::Error => {
                self == SubmissionStatus::Sending
            }
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        };
        f.write_str(name)
    }
}

/// Snapshot of a form's fields at submit time, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.insert(name, value);
        self
    }

    /// Replaces an existing value in place so field order stays stable.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PackageType {
    #[default]
    Documents,
    Electronics,
    PersonalItems,
    BusinessGoods,
    Other,
}

impl PackageType {
    pub const ALL: [PackageType; 5] = [
        PackageType::Documents,
        PackageType::Electronics,
        PackageType::PersonalItems,
        PackageType::BusinessGoods,
        PackageType::Other,
    ];

    /// The `<option>` text, which is also the submitted value.
    pub fn label(self) -> &'static str {
        match self {
            PackageType::Documents => "Documents",
            PackageType::Electronics => "Electronics",
            PackageType::PersonalItems => "Personal Items",
            PackageType::BusinessGoods => "Business Goods",
            PackageType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_fragment() {
        assert_eq!(Route::from_fragment(""), Route::root());
        assert_eq!(Route::from_fragment("#"), Route::root());
        assert_eq!(Route::from_fragment("#/about").as_str(), "/about");
        assert_eq!(Route::from_fragment("/track").as_str(), "/track");
        assert_eq!(Route::from_fragment("#/unknown").as_str(), "/unknown");
    }

    #[test]
    fn test_status_transitions() {
        use SubmissionStatus::*;
        assert!(Idle.can_transition_to(Sending));
        assert!(Sending.can_transition_to(Sending));
        assert!(Sending.can_transition_to(Success));
        assert!(Error.can_transition_to(Sending));
        assert!(!Idle.can_transition_to(Success));
        assert!(!Success.can_transition_to(Error));
        assert!(!Sending.can_transition_to(Idle));
    }

    #[test]
    fn test_payload_keeps_field_order() {
        let mut payload = FormPayload::new()
            .with("fullName", "Ada")
            .with("email", "ada@example.com");
        payload.insert("fullName", "Ada Lovelace");

        let names: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["fullName", "email"]);
        assert_eq!(payload.get("fullName"), Some("Ada Lovelace"));
        assert_eq!(payload.get("origin"), None);
    }

    #[test]
    fn test_package_type_labels() {
        assert_eq!(
            PackageType::from_label("Personal Items"),
            Some(PackageType::PersonalItems)
        );
        assert_eq!(PackageType::from_label("Furniture"), None);
        assert_eq!(PackageType::default().label(), "Documents");
    }
}
