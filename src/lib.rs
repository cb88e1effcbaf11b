//! Shared helpers used across the crippy firmware tooling.
//!
//! Each module is independent: directory creation and path joining live in
//! [`paths`], payload byte checks in [`ascii`], debug output in [`hexdump`]
//! and [`progress`], string helpers in [`format`], and plist I/O in
//! [`plist`] on top of the whole-file helpers in [`file`].

pub mod ascii;
pub mod file;
pub mod format;
pub mod hexdump;
pub mod paths;
pub mod plist;
pub mod progress;

pub use ascii::{check_ascii_pointer, check_ascii_string};
pub use file::{file_read, file_write};
pub use format::{format_size_for_display, prot2str, str_toupper};
pub use hexdump::{hexdump, render_hexdump, write_hexdump};
pub use paths::{build_path, mkdir_with_parents, parent_dir};
pub use self::plist::{PlistFormat, decode_plist, encode_plist, plist_read, plist_write};
pub use progress::{
    ProgressStyle, print_progress, print_progress_real, render_progress, write_progress,
};
