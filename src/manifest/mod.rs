use serde::Serialize;
use std::fmt;

use crate::config::DepsConfig;
use crate::constants::env;


/// Environment overrides for the dependency manifest, resolved once at the
/// process boundary instead of read ad hoc.
#[derive(Debug, Clone, Default)]
pub struct ManifestConfig {
    /// Exact Houdini version, bypassing the range expression
    pub houdini_version_override: Option<String>,

    /// Drop the CityEngine SDK requirement entirely. Takes precedence over
    /// `cesdk_version_override`.
    pub skip_cesdk: bool,

    /// Exact CityEngine SDK version replacing the default
    pub cesdk_version_override: Option<String>,
}

impl ManifestConfig {
    /// Read the `PLD_CONAN_*` environment variables. The skip flag is
    /// presence-only; its value is ignored.
    pub fn from_env() -> Self {
        Self {
            houdini_version_override: std::env::var(env::HOUDINI_VERSION).ok(),
            skip_cesdk: std::env::var_os(env::SKIP_CESDK).is_some(),
            cesdk_version_override: std::env::var(env::CESDK_VERSION).ok(),
        }
    }
}

/// Version part of a Conan requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSpec {
    Exact(String),
    Range(String),
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Exact(version) => write!(f, "{}", version),
            VersionSpec::Range(range) => write!(f, "[{}]", range),
        }
    }
}

/// One declared dependency: package, version-or-range, optional channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub package: String,
    pub version: VersionSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl Requirement {
    pub fn pinned(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: VersionSpec::Exact(version.into()),
            channel: None,
        }
    }

    pub fn exact(
        package: impl Into<String>,
        version: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            version: VersionSpec::Exact(version.into()),
            channel: Some(channel.into()),
        }
    }

    pub fn range(
        package: impl Into<String>,
        range: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            version: VersionSpec::Range(range.into()),
            channel: Some(channel.into()),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.version)?;
        if let Some(channel) = &self.channel {
            write!(f, "@{}", channel)?;
        }
        Ok(())
    }
}

/// Declare the dependency requirements in fixed order: catch2 always first,
/// then the Houdini SDK, then (unless skipped) the CityEngine SDK.
pub fn requirements(deps: &DepsConfig, config: &ManifestConfig) -> Vec<Requirement> {
    let mut declared = Vec::with_capacity(3);

    declared.push(Requirement::pinned("catch2", &deps.catch2_version));

    match &config.houdini_version_override {
        Some(version) => {
            declared.push(Requirement::exact("houdini", version, &deps.houdini_channel));
        }
        None => {
            declared.push(Requirement::range(
                "houdini",
                &deps.houdini_version_range,
                &deps.houdini_channel,
            ));
        }
    }

    // skip wins over an override, checked first
    if !config.skip_cesdk {
        let version = config
            .cesdk_version_override
            .as_deref()
            .unwrap_or(&deps.cesdk_default_version);
        declared.push(Requirement::exact("cesdk", version, &deps.cesdk_channel));
    }

    declared
}
