//! Platform adapters for color negotiation.
//!
//! Unix terminals interpret ANSI escape sequences as is, so the
//! [`StreamAdapter`] only decides whether escape sequences are welcome. The
//! Windows console, however, needs to be told to interpret them, so the
//! [`ConsoleAdapter`] also reconfigures the console and later restores the
//! original configuration. The adapter used by a build is selected at compile
//! time through `sys::PlatformAdapter`. Both adapters are compiled on
//! all platforms so that their logic can be tested anywhere.

use crate::err::Result;
use crate::opt::Options;

mod console;
mod stream;

#[cfg_attr(target_family = "unix", allow(unused_imports))]
pub(crate) use console::{ConsoleAdapter, ConsoleApi, Stream};
#[cfg_attr(target_family = "windows", allow(unused_imports))]
pub(crate) use stream::{StreamAdapter, TtyProbe};

#[cfg(test)]
pub(crate) use console::FakeConsole;
#[cfg(all(test, target_family = "windows"))]
pub(crate) use console::ENABLE_VIRTUAL_TERMINAL_PROCESSING;
#[cfg(test)]
pub(crate) use stream::FakeTty;

/// A terminal adapter.
///
/// [`crate::Colors`] invokes [`Adapter::detect_support`] and, if that
/// succeeds, [`Adapter::setup`] exactly once. It invokes
/// [`Adapter::restore`] exactly once when it is dropped, independent of
/// whether the other two methods succeeded.
pub(crate) trait Adapter {
    /// Determine whether the terminal supports ANSI escape sequences.
    fn detect_support(&mut self, options: &Options) -> Result<()>;

    /// Configure the terminal to interpret ANSI escape sequences.
    fn setup(&mut self) -> Result<()>;

    /// Restore the terminal's original configuration.
    fn restore(&mut self);
}
