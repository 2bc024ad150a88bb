//! The greeting demo itself

use std::io::{self, Write};
use std::process::ExitCode;

use crate::display::{MessageBoxStyle, TextDisplay};
use crate::encoding::{CodePage, CodePageGuard, ConsoleEncoding};
use crate::{GREETING, TITLE};

/// What to print and show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// Dialog title
    pub title: String,
    /// Text printed to the console and shown in the dialog body
    pub body: String,
    /// Dialog icon and behavior; the dialog always has a single OK button
    pub style: MessageBoxStyle,
}

impl Default for Greeting {
    fn default() -> Self {
        Greeting {
            title: TITLE.to_owned(),
            body: GREETING.to_owned(),
            style: MessageBoxStyle::empty(),
        }
    }
}

/// Process exit status returned by [`run_demo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(u8);

impl ExitStatus {
    /// Successful completion
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    /// Return the numeric exit code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Return whether this is [`ExitStatus::SUCCESS`].
    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> ExitCode {
        ExitCode::from(status.0)
    }
}

/// Print `greeting` to `out` and show it in a dialog, with the console output code page set to
/// UTF-8 for the duration.
///
/// The original code page is put back before returning. None of the steps are fatal: failures
/// are logged and the remaining steps still run.
pub fn run_demo<E, D, W>(encoding: E, display: D, out: &mut W, greeting: &Greeting) -> ExitStatus
where
    E: ConsoleEncoding,
    D: TextDisplay,
    W: Write + ?Sized,
{
    let guard = CodePageGuard::switch(encoding, CodePage::UTF8);

    if let Err(error) = write_line(out, &greeting.body) {
        log::warn!("Failed to write greeting to output: {error}");
    }

    match display.show_message(&greeting.title, &greeting.body, greeting.style) {
        Ok(result) => log::debug!("Dialog dismissed with {result:?}"),
        Err(error) => log::warn!("Failed to show greeting dialog: {error}"),
    }

    drop(guard);

    ExitStatus::SUCCESS
}

fn write_line<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DialogResult;
    use crate::encoding::tests::FakeConsole;
    use std::cell::RefCell;

    /// Records every dialog along with the code page active when it was shown.
    struct FakeDialog<'a> {
        console: &'a FakeConsole,
        shown: RefCell<Vec<(String, String, CodePage)>>,
        fail: bool,
    }

    impl<'a> FakeDialog<'a> {
        fn new(console: &'a FakeConsole) -> Self {
            FakeDialog {
                console,
                shown: RefCell::new(Vec::new()),
                fail: false,
            }
        }
    }

    impl TextDisplay for FakeDialog<'_> {
        fn show_message(
            &self,
            title: &str,
            text: &str,
            _style: MessageBoxStyle,
        ) -> io::Result<DialogResult> {
            self.shown.borrow_mut().push((
                title.to_owned(),
                text.to_owned(),
                self.console.active.get(),
            ));
            if self.fail {
                return Err(io::Error::other("no desktop"));
            }
            Ok(DialogResult::Ok)
        }
    }

    /// Writer that refuses everything.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_oem_us_console() {
        let console = FakeConsole::new(CodePage::OEM_US);
        let dialog = FakeDialog::new(&console);
        let mut out = Vec::new();

        let status = run_demo(&console, &dialog, &mut out, &Greeting::default());

        assert_eq!(status, ExitStatus::SUCCESS);
        assert_eq!(status.code(), 0);
        assert_eq!(
            String::from_utf8(out).expect("output is not UTF-8"),
            "你好 / こんにちは / 안녕하세요\n"
        );

        let shown = dialog.shown.borrow();
        assert_eq!(shown.len(), 1);
        let (title, text, active) = &shown[0];
        assert_eq!(title, "Hello");
        assert_eq!(text, "你好 / こんにちは / 안녕하세요");
        assert_eq!(*active, CodePage::UTF8);

        assert_eq!(console.active.get(), CodePage::OEM_US);
        assert_eq!(
            *console.history.borrow(),
            [CodePage::UTF8, CodePage::OEM_US]
        );
    }

    #[test]
    fn test_dialog_text_matches_output_line() {
        let console = FakeConsole::new(CodePage::new(932));
        let dialog = FakeDialog::new(&console);
        let mut out = Vec::new();

        run_demo(&console, &dialog, &mut out, &Greeting::default());

        let (_, text, _) = &dialog.shown.borrow()[0];
        let line = out.strip_suffix(b"\n").expect("missing line terminator");
        assert_eq!(text.as_bytes(), line);
    }

    #[test]
    fn test_output_is_utf8_whatever_the_code_page() {
        let mut console = FakeConsole::new(CodePage::OEM_US);
        console.reject = Some(CodePage::UTF8);
        let dialog = FakeDialog::new(&console);
        let mut out = Vec::new();

        run_demo(&console, &dialog, &mut out, &Greeting::default());

        assert_eq!(out, GREETING.bytes().chain(*b"\n").collect::<Vec<_>>());
        assert_eq!(console.active.get(), CodePage::OEM_US);
    }

    #[test]
    fn test_restores_when_output_fails() {
        let console = FakeConsole::new(CodePage::new(866));
        let dialog = FakeDialog::new(&console);

        let status = run_demo(&console, &dialog, &mut BrokenPipe, &Greeting::default());

        assert!(status.is_success());
        assert_eq!(dialog.shown.borrow().len(), 1);
        assert_eq!(console.active.get(), CodePage::new(866));
    }

    #[test]
    fn test_restores_when_dialog_fails() {
        let console = FakeConsole::new(CodePage::new(950));
        let mut dialog = FakeDialog::new(&console);
        dialog.fail = true;
        let mut out = Vec::new();

        let status = run_demo(&console, &dialog, &mut out, &Greeting::default());

        assert!(status.is_success());
        assert_eq!(console.active.get(), CodePage::new(950));
    }

    #[test]
    fn test_without_console() {
        let mut console = FakeConsole::new(CodePage::OEM_US);
        console.fail_query = true;
        let dialog = FakeDialog::new(&console);
        let mut out = Vec::new();

        let status = run_demo(&console, &dialog, &mut out, &Greeting::default());

        assert!(status.is_success());
        assert!(console.history.borrow().is_empty());
        assert_eq!(out, format!("{GREETING}\n").into_bytes());
        assert_eq!(dialog.shown.borrow().len(), 1);
    }

    #[test]
    fn test_custom_greeting() {
        let console = FakeConsole::new(CodePage::UTF8);
        let dialog = FakeDialog::new(&console);
        let mut out = Vec::new();
        let greeting = Greeting {
            title: "Grüße".to_owned(),
            body: "Привет".to_owned(),
            style: MessageBoxStyle::ICON_INFORMATION,
        };

        run_demo(&console, &dialog, &mut out, &greeting);

        assert_eq!(out, "Привет\n".as_bytes());
        assert_eq!(dialog.shown.borrow()[0].0, "Grüße");
        assert_eq!(console.active.get(), CodePage::UTF8);
    }
}
