//! Display labels for risk factor names.
//!
//! The dashboard ships a built-in bokmål catalog; hosts carrying their own
//! message catalog override labels per factor instead of injecting a
//! translation callback.

use std::collections::HashMap;

/// The risk factor names this client knows how to present.
///
/// The backend's set is open; anything outside this list still renders,
/// with a generic icon and a label derived from the raw name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    /// Sentinel for the base CVSS-derived score, not a true factor.
    Severity,
    Exposure,
    Kev,
    Epss,
    Environment,
    PatchAvailable,
    BuildAge,
    ExploitReference,
}

impl FactorKind {
    /// Backend identifier for this factor.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Exposure => "exposure",
            Self::Kev => "kev",
            Self::Epss => "epss",
            Self::Environment => "environment",
            Self::PatchAvailable => "patch_available",
            Self::BuildAge => "build_age",
            Self::ExploitReference => "exploit_reference",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "severity" => Some(Self::Severity),
            "exposure" => Some(Self::Exposure),
            "kev" => Some(Self::Kev),
            "epss" => Some(Self::Epss),
            "environment" => Some(Self::Environment),
            "patch_available" => Some(Self::PatchAvailable),
            "build_age" => Some(Self::BuildAge),
            "exploit_reference" => Some(Self::ExploitReference),
            _ => None,
        }
    }
}

/// Lookup table from factor name to display label.
#[derive(Debug, Clone)]
pub struct LabelCatalog {
    labels: HashMap<FactorKind, String>,
}

impl Default for LabelCatalog {
    /// The built-in bokmål labels matching the dashboard's default locale.
    fn default() -> Self {
        let labels = [
            (FactorKind::Severity, "Alvorlighetsgrad"),
            (FactorKind::Exposure, "Eksponering"),
            (FactorKind::Kev, "Kjent utnyttet sårbarhet"),
            (FactorKind::Epss, "Sannsynlighet for utnyttelse"),
            (FactorKind::Environment, "Produksjonsmiljø"),
            (FactorKind::PatchAvailable, "Oppdatering tilgjengelig"),
            (FactorKind::BuildAge, "Alder på siste bygg"),
            (FactorKind::ExploitReference, "Kjent utnyttelseskode"),
        ]
        .into_iter()
        .map(|(kind, label)| (kind, label.to_string()))
        .collect();
        Self { labels }
    }
}

impl LabelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the label for one factor.
    pub fn with_label(mut self, kind: FactorKind, label: impl Into<String>) -> Self {
        self.labels.insert(kind, label.into());
        self
    }

    /// Resolve a backend factor name to a display label.
    ///
    /// Unknown names fall back to the title-cased raw name so novel factors
    /// still render with something readable.
    pub fn resolve(&self, name: &str) -> String {
        FactorKind::from_name(name)
            .and_then(|kind| self.labels.get(&kind))
            .cloned()
            .unwrap_or_else(|| title_case(name))
    }
}

/// `"mystery_factor"` becomes `"Mystery Factor"`.
fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
