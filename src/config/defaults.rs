// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Registry key used when neither the config nor the system locale matches.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Fluent catalog used when the selected language has no catalog of its own.
pub const FALLBACK_LOCALE: &str = "en-US";

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Base URL of the chat API.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Header carrying the session token on authenticated requests.
pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

/// Timeout for backend requests, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Push Defaults
// ==========================================================================

/// Base URL handed out as the endpoint prefix of locally created subscriptions.
pub const DEFAULT_PUSH_ENDPOINT_BASE: &str = "http://localhost:8000/push/endpoint";

/// File name of the persisted push subscription record.
pub const PUSH_SUBSCRIPTION_FILE: &str = "push_subscription.json";
