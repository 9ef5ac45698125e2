use alloc::string::String;

/// Why a carousel could not be mounted on a host.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("carousel container not found: {0}")]
    ContainerNotFound(String),

    #[error("carousel container has no slides: {0}")]
    NoSlides(String),
}

#[cfg(feature = "toml")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid slider config: {0}")]
    Toml(#[from] toml::de::Error),
}
