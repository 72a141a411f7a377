#![cfg_attr(target_family = "unix", allow(dead_code))]

use super::Adapter;
use crate::env::Environment;
use crate::err::{Error, ErrorKind, Result};
use crate::opt::{Options, OsVersion};

/// The console mode flag enabling interpretation of ANSI escape sequences.
pub(crate) const ENABLE_VIRTUAL_TERMINAL_PROCESSING: u32 = 0x0004;

/// One of the two standard output streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Stream {
    Output,
    Error,
}

impl Stream {
    pub const ALL: [Stream; 2] = [Stream::Output, Stream::Error];
}

/// The operating system's console interface.
///
/// Implementations must be cheap to clone, since the restore guard keeps its
/// own copy.
pub(crate) trait ConsoleApi: Clone {
    /// The console handle.
    type Handle: Copy;

    /// Get the handle for the standard stream, if it is valid.
    fn handle(&self, stream: Stream) -> Option<Self::Handle>;

    /// Read the console mode.
    fn mode(&self, handle: Self::Handle) -> std::io::Result<u32>;

    /// Write the console mode.
    fn set_mode(&self, handle: Self::Handle, mode: u32) -> std::io::Result<()>;

    /// Determine the operating system version.
    fn version(&self) -> Option<OsVersion>;
}

// ----------------------------------------------------------------------------------------------------------

/// The console modes of standard output and standard error before
/// negotiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    output: u32,
    error: u32,
}

impl Snapshot {
    pub fn mode(&self, stream: Stream) -> u32 {
        match stream {
            Stream::Output => self.output,
            Stream::Error => self.error,
        }
    }
}

/// A guard restoring captured console modes when dropped.
///
/// Holding a guard means the modes have been captured. Whether or not they
/// were changed since, dropping the guard writes the captured modes back to
/// both streams. Since dropping consumes the guard, that happens at most once.
#[derive(Debug)]
struct ModeGuard<C: ConsoleApi> {
    console: C,
    snapshot: Snapshot,
    mutated: bool,
}

impl<C: ConsoleApi> ModeGuard<C> {
    fn capture(console: &C, output: C::Handle, error: C::Handle) -> Result<Self> {
        let output = console
            .mode(output)
            .map_err(|e| Error::with_source(ErrorKind::ModeQueryFailed, e))?;
        let error = console
            .mode(error)
            .map_err(|e| Error::with_source(ErrorKind::ModeQueryFailed, e))?;

        Ok(Self {
            console: console.clone(),
            snapshot: Snapshot { output, error },
            mutated: false,
        })
    }

    /// Turn on virtual terminal processing for standard output and error.
    fn enable(&mut self) -> Result<()> {
        for stream in Stream::ALL {
            let handle = self
                .console
                .handle(stream)
                .ok_or(ErrorKind::HandleUnavailable)?;
            let mode = self.snapshot.mode(stream) | ENABLE_VIRTUAL_TERMINAL_PROCESSING;
            self.console
                .set_mode(handle, mode)
                .map_err(|e| Error::with_source(ErrorKind::ModeSetFailed, e))?;
            self.mutated = true;
        }

        Ok(())
    }
}

impl<C: ConsoleApi> Drop for ModeGuard<C> {
    fn drop(&mut self) {
        tracing::debug!(snapshot = ?self.snapshot, mutated = self.mutated, "restoring console modes");

        // Nothing can be done about failures at this point.
        for stream in Stream::ALL {
            let Some(handle) = self.console.handle(stream) else {
                tracing::trace!(?stream, "no handle for restoring console mode");
                continue;
            };
            if let Err(error) = self.console.set_mode(handle, self.snapshot.mode(stream)) {
                tracing::trace!(?stream, %error, "unable to restore console mode");
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The adapter for consoles that need to be told to interpret escape
/// sequences.
///
/// Detection captures both console modes as soon as both can be read, and
/// the adapter then holds on to a restore guard until [`Adapter::restore`] or
/// until it is dropped, whichever comes first.
#[derive(Debug)]
pub(crate) struct ConsoleAdapter<E, C: ConsoleApi> {
    env: E,
    console: C,
    guard: Option<ModeGuard<C>>,
}

impl<E: Environment, C: ConsoleApi> ConsoleAdapter<E, C> {
    pub fn new(env: E, console: C) -> Self {
        Self {
            env,
            console,
            guard: None,
        }
    }

    /// Get the captured console modes.
    #[cfg(test)]
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.guard.as_ref().map(|g| g.snapshot)
    }
}

impl<E: Environment, C: ConsoleApi> Adapter for ConsoleAdapter<E, C> {
    fn detect_support(&mut self, options: &Options) -> Result<()> {
        if self.env.is_defined("NO_COLOR") {
            return Err(ErrorKind::EnvironmentDisabled.into());
        }

        let output = self
            .console
            .handle(Stream::Output)
            .ok_or(ErrorKind::HandleUnavailable)?;
        let error = self
            .console
            .handle(Stream::Error)
            .ok_or(ErrorKind::HandleUnavailable)?;

        let guard = ModeGuard::capture(&self.console, output, error)?;
        tracing::debug!(snapshot = ?guard.snapshot, "captured console modes");
        self.guard = Some(guard);

        match self.console.version() {
            Some(version) if version.supports(options.threshold()) => Ok(()),
            Some(version) => {
                tracing::debug!(%version, threshold = %options.threshold(), "console predates ANSI support");
                Err(ErrorKind::UnsupportedOsVersion.into())
            }
            None => Err(ErrorKind::UnsupportedOsVersion.into()),
        }
    }

    fn setup(&mut self) -> Result<()> {
        // Detection only succeeds after capturing the modes.
        let Some(ref mut guard) = self.guard else {
            return Err(ErrorKind::ModeQueryFailed.into());
        };
        guard.enable()
    }

    fn restore(&mut self) {
        drop(self.guard.take());
    }
}

// ----------------------------------------------------------------------------------------------------------


#[cfg(test)]
pub(crate) use test::FakeConsole;
