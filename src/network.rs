//! Network constants for the Morisawa Fonts web font API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.morisawafonts.com/webfont/v1";

/// `User-Agent` sent by non-browser hosts.
pub const USER_AGENT: &str = concat!("morisawafonts-webfont-rs/", env!("CARGO_PKG_VERSION"));
