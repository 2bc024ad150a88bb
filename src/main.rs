use std::process::ExitCode;

#[cfg(windows)]
fn main() -> ExitCode {
    use hello_utf8::win32::{Console, MessageBox};
    use hello_utf8::{Greeting, run_demo};

    // Log records go to stderr, keeping stdout to the greeting alone
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut stdout = std::io::stdout().lock();
    run_demo(Console, MessageBox, &mut stdout, &Greeting::default()).into()
}

#[cfg(not(windows))]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::error!("This program is for the Windows platform only.");
    ExitCode::SUCCESS
}
