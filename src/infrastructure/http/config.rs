use std::time::Duration;

pub const USER_AGENT: &str = concat!("readme-roots/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
