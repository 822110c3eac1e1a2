//! Randomized SMS provider ordering

use rand::seq::SliceRandom;
use rand::Rng;

use sc_shared::config::{PlatformSetting, PlatformsConfig};

use crate::domain::ProviderConfig;

/// Holds the normalized provider list and hands out random orderings
///
/// Every call to [`ProviderSelector::ordered`] returns a fresh uniform
/// permutation so no vendor is favoured across issuances.
#[derive(Debug, Clone, Default)]
pub struct ProviderSelector {
    providers: Vec<ProviderConfig>,
}

impl ProviderSelector {
    pub fn new(providers: Vec<ProviderConfig>) -> Self {
        let mut unique: Vec<ProviderConfig> = Vec::with_capacity(providers.len());
        for provider in providers {
            match unique.iter_mut().find(|p| p.name == provider.name) {
                // Later settings win, first position is kept
                Some(existing) => *existing = provider,
                None => unique.push(provider),
            }
        }
        Self { providers: unique }
    }

    /// Normalize raw platform configuration
    pub fn from_config(platforms: &PlatformsConfig) -> Self {
        let providers = match platforms {
            PlatformsConfig::Names(names) => names
                .iter()
                .filter(|name| !name.is_empty())
                .map(ProviderConfig::new)
                .collect(),
            PlatformsConfig::Keyed(map) => map
                .iter()
                .map(|(name, setting)| normalize(name, setting.as_ref()))
                .collect(),
        };
        Self::new(providers)
    }

    pub fn providers(&self) -> &[ProviderConfig] {
        &self.providers
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Providers in a new random order
    pub fn ordered(&self) -> Vec<ProviderConfig> {
        self.ordered_with(&mut rand::thread_rng())
    }

    pub fn ordered_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ProviderConfig> {
        let mut ordering = self.providers.clone();
        ordering.shuffle(rng);
        ordering
    }
}

fn normalize(name: &str, setting: Option<&PlatformSetting>) -> ProviderConfig {
    match setting {
        None => ProviderConfig::new(name),
        Some(PlatformSetting::TemplateId(template_id)) => {
            ProviderConfig::from_parts(name, Some(template_id), None)
        }
        Some(PlatformSetting::Detailed {
            template_id,
            code_var,
        }) => ProviderConfig::from_parts(name, template_id.as_deref(), code_var.as_deref()),
    }
}
