// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Directory under the user's config dir holding notectl's files.
///
/// Used in: `lib.rs` (`default_app_dir`)
pub const APP_DIR_NAME: &str = "notectl";

/// Config file name inside the app directory.
///
/// Used in: `lib.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File holding the persisted bearer credential. Read once at startup,
/// written on login/signup, removed on logout.
///
/// Used in: `infrastructure/credentials.rs`
pub const TOKEN_FILE_NAME: &str = "token";

/// API base URL used when neither the config file nor `--api-url` provides
/// one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_API_URL: &str = "http://localhost:4000";
