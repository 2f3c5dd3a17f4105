//! Constants for the shipit CLI

/// Environment variable holding the repository owner
pub const ENV_GITHUB_USER: &str = "GITHUB_USER";

/// Environment variable holding `owner/repo` or just `repo`
pub const ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Environment variable holding the API access token
pub const ENV_GITHUB_ACCESS_TOKEN: &str = "GITHUB_ACCESS_TOKEN";

/// Environment variable overriding the API base URL
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Name of the settings file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
