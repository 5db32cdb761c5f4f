//! Shared constants for end-to-end tests
//!
//! When the test catalog changes, update only this file and fixtures.rs.
#![allow(dead_code)]

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// "The Matrix", 1999, rating 8.7, ACTION + SCIENCE_FICTION
pub const MATRIX_ID: u32 = 603;
pub const MATRIX_TITLE: &str = "The Matrix";

/// "Inception", 2010, rating 8.8, SCIENCE_FICTION
pub const INCEPTION_ID: u32 = 27205;
pub const INCEPTION_TITLE: &str = "Inception";

/// "Barbie", 2023, rating 7.1, COMEDY + FAMILY
pub const BARBIE_ID: u32 = 346698;
pub const BARBIE_TITLE: &str = "Barbie";

/// Id not present in the test catalog
pub const MISSING_MOVIE_ID: u32 = 1;

pub const CATALOG_SIZE: usize = 3;

// ============================================================================
// Input Limits
// ============================================================================

pub const TEST_MAX_YEAR: i32 = 2025;

pub const TEST_MAX_COMMUNITY_RATING: f64 = 5.0;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Timeout for each test request
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
