use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, error, info};


/// One "build image from recipe + context + tag + arguments" invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    /// Recipe file the engine reads
    pub dockerfile: PathBuf,

    /// Build context directory
    pub context: PathBuf,

    /// Full image reference to tag the result with
    pub tag: String,

    /// Named build arguments, in declaration order
    pub build_args: Vec<(String, String)>,
}

/// Seam between build planning and the external image-build engine
pub trait ImageEngine {
    fn build_image(&self, request: &BuildRequest) -> Result<()>;
}

/// Engine implementation that shells out to the `docker` binary
pub struct DockerCli {
    binary: PathBuf,
}

impl DockerCli {
    pub fn new() -> Result<Self> {
        let binary = which::which("docker").context("docker binary not found in PATH")?;
        Ok(Self { binary })
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl ImageEngine for DockerCli {
    fn build_image(&self, request: &BuildRequest) -> Result<()> {
        info!(
            "Building image \"{}\" from {:?} at {:?}",
            request.tag, request.dockerfile, request.context
        );

        let mut cmd = Command::new(&self.binary);
        cmd.arg("build")
            .arg("--file")
            .arg(&request.dockerfile)
            .arg("--tag")
            .arg(&request.tag);
        for (key, value) in &request.build_args {
            cmd.arg("--build-arg").arg(format!("{}={}", key, value));
        }
        cmd.arg(&request.context);

        debug!("Running command: {:?}", cmd);

        let output = cmd.output().context("Failed to execute docker build")?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Docker build failed for \"{}\"!", request.tag);
            error!("stdout:\n{}", stdout);
            error!("stderr:\n{}", stderr);
            anyhow::bail!("Docker build failed for \"{}\": {}", request.tag, stderr);
        }

        info!("Successfully built image \"{}\"", request.tag);
        Ok(())
    }
}
