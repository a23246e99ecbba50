use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;


#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Image matrix configuration
    #[serde(default)]
    pub images: ImageConfig,

    /// Conan dependency defaults
    #[serde(default)]
    pub deps: DepsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Name of the shared base image
    #[serde(default = "default_base_name")]
    pub base_name: String,

    /// Name of the per-version derived images
    #[serde(default = "default_name")]
    pub name: String,

    /// Platform/toolchain tag fragment
    #[serde(default = "default_platform_tag")]
    pub platform_tag: String,

    /// Revision tag fragment
    #[serde(default = "default_revision")]
    pub revision: String,

    /// Houdini versions to build derived images for, in order
    #[serde(default = "default_houdini_versions")]
    pub houdini_versions: Vec<String>,

    /// Directory holding the Dockerfiles, relative to the repository root
    #[serde(default = "default_dockerfile_dir")]
    pub dockerfile_dir: PathBuf,

    /// Install directory template with a `{version}` placeholder
    #[serde(default = "default_install_dir_template")]
    pub install_dir_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepsConfig {
    /// Pinned catch2 version
    #[serde(default = "default_catch2_version")]
    pub catch2_version: String,

    /// Houdini version range used when no exact override is given
    #[serde(default = "default_houdini_version_range")]
    pub houdini_version_range: String,

    /// Channel for the Houdini SDK packages
    #[serde(default = "default_houdini_channel")]
    pub houdini_channel: String,

    /// Default CityEngine SDK version
    #[serde(default = "default_cesdk_version")]
    pub cesdk_default_version: String,

    /// Channel for the CityEngine SDK packages
    #[serde(default = "default_cesdk_channel")]
    pub cesdk_channel: String,
}

fn default_base_name() -> String {
    constants::image::BASE_NAME.to_string()
}

fn default_name() -> String {
    constants::image::NAME.to_string()
}

fn default_platform_tag() -> String {
    constants::image::PLATFORM_TAG.to_string()
}

fn default_revision() -> String {
    constants::image::REVISION.to_string()
}

fn default_houdini_versions() -> Vec<String> {
    constants::houdini::VERSIONS
        .iter()
        .map(|v| v.to_string())
        .collect()
}

fn default_dockerfile_dir() -> PathBuf {
    PathBuf::from(constants::dockerfile::WINDOWS_DIR)
}

fn default_install_dir_template() -> String {
    constants::houdini::INSTALL_DIR_TEMPLATE.to_string()
}

fn default_catch2_version() -> String {
    constants::conan::CATCH2_VERSION.to_string()
}

fn default_houdini_version_range() -> String {
    constants::conan::HOUDINI_VERSION_RANGE.to_string()
}

fn default_houdini_channel() -> String {
    constants::conan::HOUDINI_CHANNEL.to_string()
}

fn default_cesdk_version() -> String {
    constants::conan::CESDK_DEFAULT_VERSION.to_string()
}

fn default_cesdk_channel() -> String {
    constants::conan::CESDK_CHANNEL.to_string()
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_name: default_base_name(),
            name: default_name(),
            platform_tag: default_platform_tag(),
            revision: default_revision(),
            houdini_versions: default_houdini_versions(),
            dockerfile_dir: default_dockerfile_dir(),
            install_dir_template: default_install_dir_template(),
        }
    }
}

impl Default for DepsConfig {
    fn default() -> Self {
        Self {
            catch2_version: default_catch2_version(),
            houdini_version_range: default_houdini_version_range(),
            houdini_channel: default_houdini_channel(),
            cesdk_default_version: default_cesdk_version(),
            cesdk_channel: default_cesdk_channel(),
        }
    }
}

impl ImageConfig {
    /// Houdini install directory for the given version, used as the build
    /// context of the derived image
    pub fn install_dir(&self, version: &str) -> PathBuf {
        PathBuf::from(self.install_dir_template.replace("{version}", version))
    }
}

impl Config {
    /// Load configuration from an explicit file, or fall back to the user
    /// config dir, or defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("palladio-tc").join("config.toml");
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
