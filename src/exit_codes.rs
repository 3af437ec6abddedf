//! Exit codes for the skillplan CLI.

/// Command completed successfully.
pub const SUCCESS: i32 = 0;

/// Invalid arguments or an unreadable/unparseable intake file.
pub const USER_ERROR: i32 = 2;

/// The template lint (`skillplan check`) found problems.
pub const CHECK_FAILURE: i32 = 3;
