// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fixed-interval polling wait with a caller-specified timeout bound.

use std::time::{Duration, Instant};

use crate::errors::{HarnessError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Polls `check` every 500ms until it returns true or `timeout` elapses.
///
/// The predicate runs at least once even for a zero timeout. Expiry
/// surfaces as `WaitTimeout`; the condition itself carries no error state.
pub fn wait_until<F>(timeout: Duration, mut check: F) -> Result<()>
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + timeout;

    loop {
        if check() {
            return Ok(());
        }

        if Instant::now() >= deadline {
            return Err(HarnessError::WaitTimeout { waited: timeout });
        }

        std::thread::sleep(POLL_INTERVAL.min(deadline.saturating_duration_since(Instant::now())));
    }
}
