//! Decoder catalogs loaded from JSON.
//!
//! A catalog is a snapshot of what a platform's codec enumeration reported:
//! the platform API level plus one entry per decoder. Loading validates the
//! whole document before any [`DecoderInfo`] is built.

use crate::{CapabilityRecord, DecoderInfo, DecoderProbe, PlatformConfig};
use codeccaps_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DecoderEntry {
    pub name: String,
    #[serde(default)]
    pub mime_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<CapabilityRecord>,
}

impl DecoderEntry {
    pub fn supports_mime(&self, mime: &str) -> bool {
        self.mime_types
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(mime))
    }

    fn to_decoder_info(&self, platform: &PlatformConfig) -> DecoderInfo {
        self.clone().into_decoder_info(platform)
    }

    fn into_decoder_info(self, platform: &PlatformConfig) -> DecoderInfo {
        match self.capabilities {
            Some(record) => DecoderInfo::with_capabilities(self.name, Box::new(record), platform),
            None => DecoderInfo::new(self.name),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DecoderCatalog {
    #[serde(default)]
    pub platform: PlatformConfig,
    #[serde(default)]
    pub decoders: Vec<DecoderEntry>,
}

impl DecoderCatalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            decoders = catalog.decoders.len(),
            api_level = catalog.platform.api_level,
            "loaded decoder catalog"
        );
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.decoders {
            if entry.name.trim().is_empty() {
                return Err(Error::config("decoder name must not be empty"));
            }
            if !seen.insert(entry.name.as_str()) {
                let msg = format!("duplicate decoder name: {}", entry.name);
                return Err(Error::config(msg));
            }
            if let Some(record) = &entry.capabilities {
                if let Err(err) = record.validate() {
                    let detail = match err {
                        Error::Config(detail) => detail,
                        other => other.to_string(),
                    };
                    return Err(Error::config(format!("decoder {}: {detail}", entry.name)));
                }
            }
        }
        Ok(())
    }

    pub fn entry(&self, name: &str) -> Option<&DecoderEntry> {
        self.decoders.iter().find(|entry| entry.name == name)
    }

    /// Descriptors for every decoder, in catalog order.
    pub fn decoders(&self) -> Vec<DecoderInfo> {
        self.decoders
            .iter()
            .map(|entry| entry.to_decoder_info(&self.platform))
            .collect()
    }

    pub fn into_decoders(self) -> Vec<DecoderInfo> {
        let platform = self.platform;
        self.decoders
            .into_iter()
            .map(|entry| entry.into_decoder_info(&platform))
            .collect()
    }

    /// Descriptors for decoders that advertise `mime`, in catalog order.
    pub fn decoders_for_mime(&self, mime: &str) -> Vec<DecoderInfo> {
        self.decoders
            .iter()
            .filter(|entry| entry.supports_mime(mime))
            .map(|entry| entry.to_decoder_info(&self.platform))
            .collect()
    }

    pub fn decoder(&self, name: &str) -> Result<DecoderInfo> {
        self.entry(name)
            .map(|entry| entry.to_decoder_info(&self.platform))
            .ok_or_else(|| Error::not_found(format!("decoder {name}")))
    }
}

/// A [`DecoderProbe`] answering from a loaded catalog.
pub struct CatalogProbe {
    catalog: DecoderCatalog,
}

impl CatalogProbe {
    pub fn new(catalog: DecoderCatalog) -> Self {
        Self { catalog }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(DecoderCatalog::load(path)?))
    }

    pub fn catalog(&self) -> &DecoderCatalog {
        &self.catalog
    }

    pub fn platform(&self) -> PlatformConfig {
        self.catalog.platform
    }
}

impl DecoderProbe for CatalogProbe {
    fn decoders(&self) -> anyhow::Result<Vec<DecoderInfo>> {
        Ok(self.catalog.decoders())
    }

    fn decoder(&self, name: &str) -> anyhow::Result<Option<DecoderInfo>> {
        let platform = &self.catalog.platform;
        let entry = self.catalog.entry(name);
        Ok(entry.map(|entry| entry.to_decoder_info(platform)))
    }
}
