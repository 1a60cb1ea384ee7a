/// Result alias used by the binaries and the presentation layer.
pub type Result<T> = anyhow::Result<T>;
