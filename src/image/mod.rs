use std::fmt;

use crate::config::ImageConfig;


/// A (name, tag) pair identifying an image in the engine's local store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub name: String,
    pub tag: String,
}

impl ImageRef {
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}

/// Strip every non-digit character from a version string, e.g.
/// "21.0.559" -> "210559". Tag fragments built from the same version are
/// identical across runs.
pub fn version_digits(version: &str) -> String {
    version.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reference of the shared base image: `{base_name}:{platform_tag}-{revision}`
pub fn base_image_ref(config: &ImageConfig) -> ImageRef {
    ImageRef::new(
        &config.base_name,
        format!("{}-{}", config.platform_tag, config.revision),
    )
}

/// Reference of a derived image:
/// `{name}:{platform_tag}-hdk{digits(version)}-{revision}`
pub fn derived_image_ref(config: &ImageConfig, version: &str) -> ImageRef {
    ImageRef::new(
        &config.name,
        format!(
            "{}-hdk{}-{}",
            config.platform_tag,
            version_digits(version),
            config.revision
        ),
    )
}
