//! Platform-specific terminal access.
//!
//! Each platform contributes the operating system half of its adapter and the
//! `PlatformAdapter` alias naming the adapter used for negotiation.

#[cfg(target_family = "windows")]
mod into_result;
#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "windows")]
mod windows;

use crate::env::Env;

#[cfg(target_family = "unix")]
pub(crate) type PlatformAdapter = crate::adapter::StreamAdapter<Env, unix::StdoutTty>;
#[cfg(target_family = "windows")]
pub(crate) type PlatformAdapter = crate::adapter::ConsoleAdapter<Env, windows::WinConsole>;
#[cfg(not(any(target_family = "unix", target_family = "windows")))]
pub(crate) type PlatformAdapter = crate::adapter::StreamAdapter<Env, NoTty>;

/// Create the adapter for this platform.
#[cfg(target_family = "unix")]
pub(crate) fn platform_adapter() -> PlatformAdapter {
    crate::adapter::StreamAdapter::new(Env::default(), unix::StdoutTty)
}

/// Create the adapter for this platform.
#[cfg(target_family = "windows")]
pub(crate) fn platform_adapter() -> PlatformAdapter {
    crate::adapter::ConsoleAdapter::new(Env::default(), windows::WinConsole)
}

/// Create the adapter for this platform.
#[cfg(not(any(target_family = "unix", target_family = "windows")))]
pub(crate) fn platform_adapter() -> PlatformAdapter {
    crate::adapter::StreamAdapter::new(Env::default(), NoTty)
}

/// A probe for platforms without terminals.
#[cfg(not(any(target_family = "unix", target_family = "windows")))]
#[derive(Debug)]
pub(crate) struct NoTty;

#[cfg(not(any(target_family = "unix", target_family = "windows")))]
impl crate::adapter::TtyProbe for NoTty {
    fn is_terminal(&self) -> bool {
        false
    }
}
