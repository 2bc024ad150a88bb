//! Modal message dialogs

use bitflags::bitflags;
use std::io;

use crate::util::define_int_enum;

bitflags! {
    /// Icon and behavior of a message box.
    ///
    /// These correspond to the `MB_*` constants from the Windows API. The box always has a
    /// single OK button (`MB_OK`); the empty set is a plain box without an icon.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MessageBoxStyle: u32 {
        /// Stop-sign icon.
        const ICON_ERROR = 0x0000_0010;
        /// Question-mark icon.
        const ICON_QUESTION = 0x0000_0020;
        /// Exclamation-point icon.
        const ICON_WARNING = 0x0000_0030;
        /// Lowercase "i" icon.
        const ICON_INFORMATION = 0x0000_0040;
        /// Bring the message box to the foreground.
        const SET_FOREGROUND = 0x0001_0000;
        /// Keep the message box above all non-topmost windows.
        const TOPMOST = 0x0004_0000;
    }
}

define_int_enum!("Button used to dismiss a message box\n\nThese correspond to the `ID*` constants from the Windows API.", i32, DialogResult {
    Ok = 1, "The OK button was selected";
    Cancel = 2, "The Cancel button was selected, or the box was closed";
    Abort = 3, "The Abort button was selected";
    Retry = 4, "The Retry button was selected";
    Ignore = 5, "The Ignore button was selected";
    Yes = 6, "The Yes button was selected";
    No = 7, "The No button was selected";
    Close = 8, "The Close button was selected";
    Help = 9, "The Help button was selected";
    TryAgain = 10, "The Try Again button was selected";
    Continue = 11, "The Continue button was selected";
});

/// Something that can present text to a person and wait for acknowledgement.
pub trait TextDisplay {
    /// Show `text` with the given `title`, blocking until the user dismisses it.
    fn show_message(
        &self,
        title: &str,
        text: &str,
        style: MessageBoxStyle,
    ) -> io::Result<DialogResult>;
}

impl<T: TextDisplay + ?Sized> TextDisplay for &T {
    fn show_message(
        &self,
        title: &str,
        text: &str,
        style: MessageBoxStyle,
    ) -> io::Result<DialogResult> {
        (**self).show_message(title, text, style)
    }
}
