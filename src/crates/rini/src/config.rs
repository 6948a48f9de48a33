//! Parsed configuration: sections of key/value properties

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::GLOBAL_SECTION;
use crate::types::{IniError, Properties, SectionName};
use crate::value::Value;

/// Mapping from section name to that section's properties.
///
/// The implicit section (empty name) is always present, even when no
/// property was declared before the first header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<SectionName, Properties>",
    into = "HashMap<SectionName, Properties>"
)]
pub struct Config {
    sections: HashMap<SectionName, Properties>,
}

impl Config {
    pub fn new() -> Self {
        let mut sections = HashMap::new();
        sections.insert(GLOBAL_SECTION.to_string(), Properties::new());
        Self { sections }
    }

    /// Properties of the named section, if it was declared
    pub fn section(&self, name: &str) -> Option<&Properties> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Properties> {
        self.sections.get_mut(name)
    }

    /// Properties declared before any section header
    pub fn global(&self) -> &Properties {
        // Present from construction and never removed through this API.
        &self.sections[GLOBAL_SECTION]
    }

    /// Look up `key` inside `section`
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section)?.get(key)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Properties)> {
        self.sections
            .iter()
            .map(|(name, properties)| (name.as_str(), properties))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections, including the implicit one
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false: the implicit section is counted
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn into_inner(self) -> HashMap<SectionName, Properties> {
        self.sections
    }

    /// Start a fresh, empty section, discarding any earlier one of that name
    pub(crate) fn reset_section(&mut self, name: &str) {
        self.sections.insert(name.to_string(), Properties::new());
    }

    pub(crate) fn set(&mut self, section: &str, key: String, value: Value) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key, value);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<SectionName, Properties>> for Config {
    fn from(mut sections: HashMap<SectionName, Properties>) -> Self {
        sections.entry(GLOBAL_SECTION.to_string()).or_default();
        Self { sections }
    }
}

impl From<Config> for HashMap<SectionName, Properties> {
    fn from(config: Config) -> Self {
        config.sections
    }
}

impl FromStr for Config {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
