//! Curated podcast and company domain registries.
//!
//! A registry maps a short user-facing key (`changelog`, `amazon`) to the
//! url substrings that identify that source's articles.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which registry an endpoint filters against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Universe {
    Podcasts,
    Companies,
}

impl Universe {
    pub fn registry(self) -> &'static DomainRegistry {
        match self {
            Universe::Podcasts => &PODCASTS,
            Universe::Companies => &COMPANIES,
        }
    }
}

/// What an empty selection of registry keys means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EmptySelection {
    /// No keys selected restricts to every key in the registry.
    All,
    /// No keys selected applies no url restriction.
    Unfiltered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub domains: &'static [&'static str],
}

#[derive(Debug)]
pub struct DomainRegistry {
    entries: &'static [RegistryEntry],
}

impl DomainRegistry {
    pub const fn new(entries: &'static [RegistryEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [RegistryEntry] {
        self.entries
    }

    /// Domains for `key`, or an empty slice for unknown keys.
    pub fn lookup_domains(&self, key: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.domains)
            .unwrap_or(&[])
    }

    /// Expands the selected keys into domains, in selection order.
    ///
    /// Unknown keys are dropped. An empty selection expands according to
    /// `policy`.
    pub fn expand(&self, selected: &[String], policy: EmptySelection) -> Vec<&'static str> {
        if selected.is_empty() {
            return match policy {
                EmptySelection::All => self
                    .entries
                    .iter()
                    .flat_map(|entry| entry.domains.iter().copied())
                    .collect(),
                EmptySelection::Unfiltered => Vec::new(),
            };
        }

        selected
            .iter()
            .flat_map(|key| self.lookup_domains(key).iter().copied())
            .collect()
    }
}

pub static PODCASTS: DomainRegistry = DomainRegistry::new(&[
    RegistryEntry {
        key: "data-engineering-podcast",
        name: "Data Engineering Podcast",
        domains: &["dataengineeringpodcast.com"],
    },
    RegistryEntry {
        key: "software-engineering-radio",
        name: "Software Engineering Radio",
        domains: &["se-radio.net"],
    },
    RegistryEntry {
        key: "software-engineering-daily",
        name: "Software Engineering Daily",
        domains: &["softwareengineeringdaily"],
    },
    RegistryEntry {
        key: "changelog",
        name: "Changelog",
        domains: &["changelog.com"],
    },
]);

pub static COMPANIES: DomainRegistry = DomainRegistry::new(&[
    RegistryEntry {
        key: "amazon",
        name: "Amazon",
        domains: &["amazon.science", "aws.amazon.com", "amazon.com"],
    },
    RegistryEntry {
        key: "google",
        name: "Google",
        domains: &["research.google", "blog.google", "googleblog.com"],
    },
    RegistryEntry {
        key: "meta",
        name: "Meta",
        domains: &["engineering.fb.com", "ai.meta.com"],
    },
    RegistryEntry {
        key: "microsoft",
        name: "Microsoft",
        domains: &["devblogs.microsoft.com", "microsoft.com/en-us/research"],
    },
    RegistryEntry {
        key: "netflix",
        name: "Netflix",
        domains: &["netflixtechblog.com", "netflixtechblog.medium.com"],
    },
    RegistryEntry {
        key: "uber",
        name: "Uber",
        domains: &["uber.com/blog", "eng.uber.com"],
    },
    RegistryEntry {
        key: "airbnb",
        name: "Airbnb",
        domains: &["medium.com/airbnb-engineering", "airbnb.io"],
    },
    RegistryEntry {
        key: "spotify",
        name: "Spotify",
        domains: &["engineering.atspotify.com"],
    },
    RegistryEntry {
        key: "cloudflare",
        name: "Cloudflare",
        domains: &["blog.cloudflare.com"],
    },
    RegistryEntry {
        key: "stripe",
        name: "Stripe",
        domains: &["stripe.com/blog"],
    },
]);
