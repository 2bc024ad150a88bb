//! Console and message box implementations backed by the Windows API

use std::{io, ptr};
use windows_sys::Win32::{
    System::Console::{GetConsoleOutputCP, SetConsoleOutputCP},
    UI::WindowsAndMessaging::MessageBoxW,
};

use crate::display::{DialogResult, MessageBoxStyle, TextDisplay};
use crate::encoding::{CodePage, ConsoleEncoding};
use crate::util::to_null_terminated_utf16;

/// The console attached to the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl ConsoleEncoding for Console {
    /// This corresponds to the [`GetConsoleOutputCP`] Windows API function.
    ///
    /// [`GetConsoleOutputCP`]: https://learn.microsoft.com/en-us/windows/console/getconsoleoutputcp
    fn output_code_page(&self) -> io::Result<CodePage> {
        // SAFETY: Trivially safe
        let cp = unsafe { GetConsoleOutputCP() };
        if cp == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(CodePage::new(cp))
    }

    /// This corresponds to the [`SetConsoleOutputCP`] Windows API function.
    ///
    /// [`SetConsoleOutputCP`]: https://learn.microsoft.com/en-us/windows/console/setconsoleoutputcp
    fn set_output_code_page(&self, code_page: CodePage) -> io::Result<()> {
        // SAFETY: Trivially safe
        if unsafe { SetConsoleOutputCP(code_page.id()) } == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Modal message box without an owner window.
///
/// This uses the [`MessageBoxW`] Windows API function, so text in any script is shown
/// correctly regardless of the ANSI code page.
///
/// [`MessageBoxW`]: https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-messageboxw
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBox;

impl TextDisplay for MessageBox {
    fn show_message(
        &self,
        title: &str,
        text: &str,
        style: MessageBoxStyle,
    ) -> io::Result<DialogResult> {
        let title = to_null_terminated_utf16(title);
        let text = to_null_terminated_utf16(text);

        // SAFETY: Both strings are null-terminated and outlive the call
        let result =
            unsafe { MessageBoxW(ptr::null_mut(), text.as_ptr(), title.as_ptr(), style.bits()) };

        if result == 0 {
            return Err(io::Error::last_os_error());
        }
        DialogResult::try_from(result).map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unexpected message box result {raw}"),
            )
        })
    }
}
