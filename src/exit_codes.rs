//! Exit code constants for the stackenv CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown section/field, refused overwrite)
//! - 2: Validation failure (the document has issues)
//! - 3: I/O failure (file unreadable or unwritable)
//! - 4: Schema failure (duplicate keys or invalid field descriptors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown section or field, or invalid tool config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more issues were found in the document.
pub const VALIDATION_FAILURE: i32 = 2;

/// I/O failure: a document or config file could not be read or written.
pub const IO_FAILURE: i32 = 3;

/// Schema failure: a section table violates a registry invariant.
pub const SCHEMA_FAILURE: i32 = 4;
