//! Print a multilingual greeting to the Windows console and a message box
//!
//! Console output on Windows is interpreted according to the console output code page, which
//! usually defaults to an OEM code page such as 437. This crate switches the console to UTF-8
//! for the duration of the greeting and then restores whatever was active before.
//!
//! The platform calls sit behind two small traits, [`ConsoleEncoding`] and [`TextDisplay`], so
//! [`run_demo`] can be exercised without a console or a desktop.
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(windows)]
//! # {
//! use hello_utf8::{Greeting, run_demo};
//! use hello_utf8::win32::{Console, MessageBox};
//!
//! let status = run_demo(Console, MessageBox, &mut std::io::stdout(), &Greeting::default());
//! assert!(status.is_success());
//! # }
//! ```
//!
//! See [encoding] and [display].

pub mod display;
pub mod encoding;
mod greeter;
#[cfg(windows)]
pub mod win32;

mod util;

pub use display::{DialogResult, MessageBoxStyle, TextDisplay};
pub use encoding::{CodePage, CodePageGuard, ConsoleEncoding};
pub use greeter::{ExitStatus, Greeting, run_demo};

/// Greeting printed to the console and shown in the dialog
pub const GREETING: &str = "你好 / こんにちは / 안녕하세요";

/// Title of the greeting dialog
pub const TITLE: &str = "Hello";
