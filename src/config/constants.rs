//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Username length bounds
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Maximum board title length
pub const MAX_BOARD_TITLE_LENGTH: usize = 255;

/// Maximum task title length
pub const MAX_TASK_TITLE_LENGTH: usize = 510;

// =============================================================================
// Error message suffixes
//
// Kept stable so integration tests (and gateway clients) can match on a
// substring instead of an exact sentence.
// =============================================================================

pub const MSG_NULL: &str = "can't be null";
pub const MSG_EMPTY: &str = "can't be empty";
pub const MSG_WRONG_FORMAT: &str = "wrong format";
pub const MSG_BEFORE_CURRENT_DATE: &str = "can't be less than the current date";
pub const MSG_USERNAME_LENGTH: &str = "Username should be from 3 to 32 characters long";

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Infrastructure defaults
// =============================================================================

/// Default database connection string for local development
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/taskboard";
