//! Console output code pages
//!
//! The console output code page is process-global state. [`CodePageGuard`] switches it for a
//! bounded scope and puts the previous value back when dropped.
//!
//! # Examples
//!
//! ```no_run
//! # #[cfg(windows)]
//! # {
//! use hello_utf8::encoding::{CodePage, CodePageGuard};
//! use hello_utf8::win32::Console;
//!
//! let console = Console;
//! let guard = CodePageGuard::switch(&console, CodePage::UTF8);
//! println!("active: {:?}", guard.original());
//! drop(guard); // the original code page is restored here
//! # }
//! ```

use std::{fmt, io};

/// A Windows code page identifier.
///
/// Any `u32` is accepted, so a code page read from the console can always be written back,
/// whether or not it has a name here.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePage(u32);

impl CodePage {
    /// OEM United States
    pub const OEM_US: CodePage = CodePage(437);
    /// Unicode (UTF-8)
    pub const UTF8: CodePage = CodePage(65001);

    /// Create a code page from its numeric identifier.
    pub const fn new(id: u32) -> Self {
        CodePage(id)
    }

    /// Return the numeric identifier.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Return a human-readable name for the named code pages.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            CodePage::OEM_US => "OEM United States",
            CodePage::UTF8 => "UTF-8",
            _ => return None,
        };
        Some(name)
    }
}

impl From<u32> for CodePage {
    fn from(id: u32) -> Self {
        CodePage(id)
    }
}

impl From<CodePage> for u32 {
    fn from(cp: CodePage) -> u32 {
        cp.0
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({name})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Read and change the output code page of a console.
pub trait ConsoleEncoding {
    /// Return the code page currently used for console output.
    fn output_code_page(&self) -> io::Result<CodePage>;

    /// Change the code page used for console output.
    fn set_output_code_page(&self, code_page: CodePage) -> io::Result<()>;
}

impl<T: ConsoleEncoding + ?Sized> ConsoleEncoding for &T {
    fn output_code_page(&self) -> io::Result<CodePage> {
        (**self).output_code_page()
    }

    fn set_output_code_page(&self, code_page: CodePage) -> io::Result<()> {
        (**self).set_output_code_page(code_page)
    }
}

/// Switches the console output code page and restores the previous one when dropped.
///
/// Failures are logged and otherwise ignored. If the current code page cannot be read, the
/// guard leaves the console untouched, since there would be nothing to restore.
#[must_use = "the original code page is restored as soon as the guard is dropped"]
pub struct CodePageGuard<E: ConsoleEncoding> {
    encoding: E,
    original: Option<CodePage>,
}

impl<E: ConsoleEncoding> CodePageGuard<E> {
    /// Capture the current output code page of `encoding`, then switch it to `code_page`.
    pub fn switch(encoding: E, code_page: CodePage) -> Self {
        let original = match encoding.output_code_page() {
            Ok(original) => original,
            Err(error) => {
                log::warn!("Failed to query console output code page: {error}");
                return CodePageGuard {
                    encoding,
                    original: None,
                };
            }
        };

        log::debug!("Switching console output code page from {original} to {code_page}");
        if let Err(error) = encoding.set_output_code_page(code_page) {
            log::warn!("Failed to set console output code page to {code_page}: {error}");
        }

        CodePageGuard {
            encoding,
            original: Some(original),
        }
    }

    /// Return the code page that will be restored, if one was captured.
    pub fn original(&self) -> Option<CodePage> {
        self.original
    }
}

impl<E: ConsoleEncoding> Drop for CodePageGuard<E> {
    fn drop(&mut self) {
        let Some(original) = self.original.take() else {
            return;
        };
        log::debug!("Restoring console output code page {original}");
        if let Err(error) = self.encoding.set_output_code_page(original) {
            log::warn!("Failed to restore console output code page {original}: {error}");
        }
    }
}
