// HMI definitions shared by the UI screens
pub mod cursor;

pub use cursor::{CURSOR_BLINK_INTERVAL, CURSOR_BLINK_PERIOD};
