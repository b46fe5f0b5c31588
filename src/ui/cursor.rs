// HMI cursor timing

use std::time::Duration;

/// Cursor blink period in milliseconds.
pub const CURSOR_BLINK_PERIOD: u32 = 500;

pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(CURSOR_BLINK_PERIOD as u64);
