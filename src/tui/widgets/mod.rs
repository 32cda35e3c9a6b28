//! Reusable widgets for the TUI

pub mod input;
pub mod notification;

pub use input::{TextInput, TextInputWidget};
pub use notification::{notification_area, NotificationWidget};
