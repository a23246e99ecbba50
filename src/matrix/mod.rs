use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ImageConfig;
use crate::constants::{build_arg, dockerfile};
use crate::engine::{BuildRequest, ImageEngine};
use crate::image::{base_image_ref, derived_image_ref};


/// Ordered build plan for the image matrix: the shared base image first, then
/// one derived image per declared Houdini version.
pub fn plan(config: &ImageConfig, root: &Path) -> Vec<BuildRequest> {
    let dockerfile_dir = root.join(&config.dockerfile_dir);
    let base_image = base_image_ref(config);

    let mut requests = Vec::with_capacity(config.houdini_versions.len() + 1);
    requests.push(BuildRequest {
        dockerfile: dockerfile_dir.join(dockerfile::BASE),
        context: root.to_path_buf(),
        tag: base_image.to_string(),
        build_args: Vec::new(),
    });

    for version in &config.houdini_versions {
        requests.push(BuildRequest {
            dockerfile: dockerfile_dir.join(dockerfile::HOUDINI),
            context: config.install_dir(version),
            tag: derived_image_ref(config, version).to_string(),
            build_args: vec![
                (build_arg::BASE_IMAGE.to_string(), base_image.to_string()),
                (build_arg::HOUDINI_VERSION.to_string(), version.clone()),
            ],
        });
    }

    requests
}

/// Runs the image matrix against an engine, front-to-back. The first failed
/// build aborts the run; no retry, no partial bookkeeping.
pub struct MatrixBuilder<'a, E: ImageEngine> {
    config: &'a ImageConfig,
    root: PathBuf,
    engine: &'a E,
}

impl<'a, E: ImageEngine> MatrixBuilder<'a, E> {
    pub fn new(config: &'a ImageConfig, root: impl AsRef<Path>, engine: &'a E) -> Self {
        Self {
            config,
            root: root.as_ref().to_path_buf(),
            engine,
        }
    }

    pub fn run(&self) -> Result<()> {
        let requests = plan(self.config, &self.root);
        info!(
            "Building {} image(s) for {} Houdini version(s)",
            requests.len(),
            self.config.houdini_versions.len()
        );
        for request in &requests {
            self.engine.build_image(request)?;
        }
        Ok(())
    }
}
