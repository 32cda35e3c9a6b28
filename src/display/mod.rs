//! Display formatting
//!
//! Turns ledger state into list lines, filter options, totals text and the
//! month heading. Nothing here touches the terminal directly.

pub mod category;
pub mod filter;
pub mod list;
pub mod notification;
pub mod summary;

pub use category::format_category_tree;
pub use filter::{FilterControl, FilterOption};
pub use list::{format_item_line, format_item_table, render_filtered, ListLine};
pub use notification::{Notification, ADDED_MESSAGE};
pub use summary::{current_month_label, format_totals, month_label};
