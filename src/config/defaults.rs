// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and file names.

// ==========================================================================
// Files
// ==========================================================================

/// User settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Preference store file inside the data directory.
pub const STORAGE_FILE: &str = "storage.cbor";

// ==========================================================================
// Logging
// ==========================================================================

/// `tracing` filter used when neither `RUST_LOG` nor settings provide one.
pub const DEFAULT_LOG_FILTER: &str = "warn";
