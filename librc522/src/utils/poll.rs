//! Bounded busy-wait.
//!
//! The chip raises completion flags in its IRQ registers; the driver has no
//! interrupt line, so it re-reads the register a fixed number of times
//! instead. The budget is an iteration count, not a wall-clock timeout: how
//! long it lasts depends on the transport latency per read.

use crate::Result;

/// Call `check` until it reports `true` or `max_iterations` calls have been
/// made. Returns whether the condition was met within the budget.
///
/// A budget of zero never calls `check`. Errors from `check` (transport
/// failures) abort the wait immediately.
pub fn poll_until<F>(max_iterations: u32, mut check: F) -> Result<bool>
where
    F: FnMut() -> Result<bool>,
{
    for _ in 0..max_iterations {
        if check()? {
            return Ok(true);
        }
    }
    Ok(false)
}
