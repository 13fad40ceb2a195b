// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - ZAP DAST Harness Library
 * Exposes harness modules for testing
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod browser;
pub mod config;
pub mod errors;
pub mod grouping;
pub mod launcher;
pub mod reporting;
pub mod types;
pub mod wait;
pub mod zap_client;
