/// Image naming constants for the toolchain matrix
pub mod image {
    /// Name of the shared base image
    pub const BASE_NAME: &str = "palladio-tc-base";

    /// Name of the per-Houdini-version derived images
    pub const NAME: &str = "palladio-tc";

    /// Platform/toolchain tag fragment (Windows Server 2019, MSVC 14.38)
    pub const PLATFORM_TAG: &str = "win19-vc1438";

    /// Image revision tag fragment
    pub const REVISION: &str = "v0";
}

/// Houdini release constants
pub mod houdini {
    /// Houdini versions the matrix is built for, in declaration order
    pub const VERSIONS: &[&str] = &["21.0.559", "20.5.684", "20.0.896"];

    /// Install directory template; `{version}` is replaced with the full
    /// dotted version string
    pub const INSTALL_DIR_TEMPLATE: &str =
        "C:/Program Files/Side Effects Software/Houdini {version}";
}

/// Dockerfile locations relative to the repository root
pub mod dockerfile {
    /// Directory holding the Windows toolchain Dockerfiles
    pub const WINDOWS_DIR: &str = "docker/windows";

    /// Recipe for the shared base image
    pub const BASE: &str = "Dockerfile-base";

    /// Recipe for the per-version derived images
    pub const HOUDINI: &str = "Dockerfile-houdini";
}

/// Build argument names passed to the derived image builds
pub mod build_arg {
    /// Full reference of the base image
    pub const BASE_IMAGE: &str = "BASE_IMAGE";

    /// Dotted Houdini version string
    pub const HOUDINI_VERSION: &str = "HOUDINI_VERSION";
}

/// Default Conan dependency versions and channels
pub mod conan {
    /// Pinned catch2 version
    pub const CATCH2_VERSION: &str = "2.13.7";

    /// Houdini version range used when no exact override is given
    pub const HOUDINI_VERSION_RANGE: &str = "21.0";

    /// Channel for the Houdini SDK packages
    pub const HOUDINI_CHANNEL: &str = "sidefx/stable";

    /// Default CityEngine SDK version
    pub const CESDK_DEFAULT_VERSION: &str = "3.2.10650";

    /// Channel for the CityEngine SDK packages
    pub const CESDK_CHANNEL: &str = "esri-rd-zurich/stable";
}

/// Environment variables honored by the dependency manifest
pub mod env {
    /// Exact Houdini version override
    pub const HOUDINI_VERSION: &str = "PLD_CONAN_HOUDINI_VERSION";

    /// Presence-only flag that drops the CityEngine SDK requirement
    pub const SKIP_CESDK: &str = "PLD_CONAN_SKIP_CESDK";

    /// Exact CityEngine SDK version override
    pub const CESDK_VERSION: &str = "PLD_CONAN_CESDK_VERSION";
}
