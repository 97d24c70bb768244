// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "traceview";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".traceview";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "traceview.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "TRACEVIEW_CONFIG";

// =============================================================================
// Environment Variables - Logging
// =============================================================================

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "TRACEVIEW_LOG";

// =============================================================================
// Environment Variables - Prettify
// =============================================================================

/// Environment variable for the default payload direction
pub const ENV_DIRECTION: &str = "TRACEVIEW_DIRECTION";

/// Environment variable for the output format
pub const ENV_FORMAT: &str = "TRACEVIEW_FORMAT";

/// Environment variable for the preview length limit
pub const ENV_MAX_LENGTH: &str = "TRACEVIEW_MAX_LENGTH";

// =============================================================================
// Input
// =============================================================================

/// Path argument meaning "read from stdin"
pub const STDIN_PATH: &str = "-";
