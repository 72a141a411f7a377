use std::mem::ManuallyDrop;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::adapter::Adapter;
use crate::err::{ErrorKind, Result};
use crate::opt::{Mode, Options};
use crate::sys::{platform_adapter, PlatformAdapter};
use crate::Palette;

/// The live negotiation, if any.
static REGISTRY: Registry<PlatformAdapter> = Registry::new();

/// Exclusive access to the terminal configuration. Detection holds this lock
/// while possibly mutating the configuration and restoration while writing
/// the original configuration back.
static TERMINAL: Mutex<()> = Mutex::new(());

/// The outcome of negotiating with a terminal adapter.
///
/// Dropping a negotiation restores the terminal configuration.
#[derive(Debug)]
struct Negotiation<A: Adapter> {
    options: Options,
    palette: Palette,
    adapter: A,
}

impl<A: Adapter> Negotiation<A> {
    fn run(mut adapter: A, options: Options) -> Self {
        let palette = {
            let _terminal = TERMINAL.lock().unwrap_or_else(PoisonError::into_inner);
            let result = Self::detect(&mut adapter, &options);
            match result {
                Ok(()) => tracing::debug!("terminal supports ANSI colors"),
                Err(ref error) => {
                    tracing::debug!(kind = ?error.kind(), %error, "terminal colors disabled");
                }
            }
            Palette::new(result.is_ok())
        };

        Self {
            options,
            palette,
            adapter,
        }
    }

    fn detect(adapter: &mut A, options: &Options) -> Result<()> {
        if options.mode() == Mode::Never {
            return Err(ErrorKind::Disabled.into());
        }

        adapter.detect_support(options)?;
        adapter.setup()
    }
}

impl<A: Adapter> Drop for Negotiation<A> {
    fn drop(&mut self) {
        let _terminal = TERMINAL.lock().unwrap_or_else(PoisonError::into_inner);
        self.adapter.restore();
    }
}

/// The registry of the live negotiation.
///
/// Both looking up the live negotiation and releasing a reference to it
/// happen while holding the registry's lock. Hence, when releasing the last
/// reference restores the terminal, no other thread can observe the
/// negotiation as gone and start a new one until restoration has completed.
#[derive(Debug)]
struct Registry<A: Adapter> {
    current: Mutex<Weak<Negotiation<A>>>,
}

impl<A: Adapter> Registry<A> {
    const fn new() -> Self {
        Self {
            current: Mutex::new(Weak::new()),
        }
    }

    /// Get the live negotiation or, if there is none, run a new one.
    fn negotiate<F>(&self, adapter: F, options: Options) -> Arc<Negotiation<A>>
    where
        F: FnOnce() -> A,
    {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(negotiation) = current.upgrade() {
            return negotiation;
        }

        let negotiation = Arc::new(Negotiation::run(adapter(), options));
        *current = Arc::downgrade(&negotiation);
        negotiation
    }

    /// Release a reference to the live negotiation.
    fn release(&self, negotiation: Arc<Negotiation<A>>) {
        let _current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        drop(negotiation);
    }
}

/// The negotiated color support for standard output and standard error.
///
/// Creating a `Colors` instance determines whether the terminal supports ANSI
/// escape sequences, configuring the Windows console to interpret them if
/// necessary. The resulting [`Palette`] stays the same for the lifetime of
/// the instance. Dropping the last clone restores the console's original
/// configuration.
///
/// Applications should negotiate once, early in `main`, and pass the instance
/// (or its palette) to whatever code produces colored output. While an
/// instance is alive, negotiating again from any thread returns a clone of
/// that instance without repeating detection. That also means the options
/// passed to the second negotiation are ignored. Once the last clone has been
/// dropped and the console restored, negotiating again starts from scratch.
///
/// Since colors are a nicety, negotiation never fails. Whenever the
/// environment, the terminal, or the operating system gets in the way, the
/// palette is simply empty.
///
/// # Example
///
/// ```
/// # use prettyansi::Colors;
/// let colors = Colors::negotiate();
/// let palette = colors.palette();
///
/// let message = format!("{}warning:{} disk almost full", palette.yellow(), palette.reset());
/// assert!(message.ends_with("disk almost full"));
/// assert_eq!(colors.supports_color(), !palette.is_plain());
/// ```
#[derive(Debug)]
pub struct Colors {
    inner: ManuallyDrop<Arc<Negotiation<PlatformAdapter>>>,
}

impl Colors {
    /// Negotiate color support with the default options.
    pub fn negotiate() -> Self {
        Self::with_options(Options::default())
    }

    /// Negotiate color support with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            inner: ManuallyDrop::new(REGISTRY.negotiate(platform_adapter, options)),
        }
    }

    /// Get the options used for negotiation.
    pub fn options(&self) -> &Options {
        &self.inner.options
    }

    /// Determine whether the terminal supports ANSI colors.
    pub fn supports_color(&self) -> bool {
        !self.inner.palette.is_plain()
    }

    /// Get the palette.
    pub fn palette(&self) -> &Palette {
        &self.inner.palette
    }
}

impl Clone for Colors {
    fn clone(&self) -> Self {
        Self {
            inner: ManuallyDrop::new(Arc::clone(&self.inner)),
        }
    }
}

impl Drop for Colors {
    fn drop(&mut self) {
        // SAFETY: inner is never touched again after being taken here.
        let inner = unsafe { ManuallyDrop::take(&mut self.inner) };
        REGISTRY.release(inner);
    }
}

#[cfg(test)]
mod test {
    use super::{Colors, Negotiation, Registry};
    use crate::adapter::{ConsoleAdapter, FakeConsole, FakeTty, Stream, StreamAdapter};
    use crate::env::FakeEnv;
    use crate::opt::{Options, OsVersion};
    use crate::Palette;
    use std::sync::Arc;
    use tracing_test::traced_test;

    fn stream(env: FakeEnv, tty: bool) -> Palette {
        Negotiation::run(StreamAdapter::new(env, FakeTty(tty)), Options::default()).palette
    }

    #[test]
    fn test_no_color() {
        for term in [None, Some("dumb"), Some("xterm-256color")] {
            for tty in [true, false] {
                let mut env = FakeEnv::new();
                env.set("NO_COLOR", "");
                if let Some(term) = term {
                    env.set("TERM", term);
                }
                assert_eq!(stream(env, tty), Palette::plain());
            }
        }

        let console = FakeConsole::new();
        let mut env = FakeEnv::new();
        env.set("NO_COLOR", "1");
        let negotiation = Negotiation::run(ConsoleAdapter::new(env, console.clone()), Options::default());
        assert!(negotiation.palette.is_plain());
        drop(negotiation);
        assert!(console.writes().is_empty());
    }

    #[test]
    fn test_stream() {
        let mut env = FakeEnv::new();
        env.set("TERM", "xterm-256color");
        assert!(stream(env, false).is_plain());

        assert!(stream(FakeEnv::new(), true).is_plain());

        let mut env = FakeEnv::new();
        env.set("TERM", "dumb");
        assert!(stream(env, true).is_plain());

        let mut env = FakeEnv::new();
        env.set("TERM", "xterm-256color");
        let palette = stream(env, true);
        assert_eq!(palette, Palette::ansi());
        assert_eq!(palette.reset(), "\x1b[0m");
        assert_eq!(palette.red(), "\x1b[31m");
    }

    #[test]
    fn test_never() {
        let mut env = FakeEnv::new();
        env.set("TERM", "xterm-256color");
        let negotiation = Negotiation::run(StreamAdapter::new(env, FakeTty(true)), Options::never());
        assert!(negotiation.palette.is_plain());

        let console = FakeConsole::new();
        let negotiation = Negotiation::run(
            ConsoleAdapter::new(FakeEnv::new(), console.clone()),
            Options::never(),
        );
        assert!(negotiation.palette.is_plain());
        drop(negotiation);
        assert!(console.writes().is_empty());
    }

    #[test]
    fn test_console_round_trip() {
        let console = FakeConsole::new();
        console.state().modes = [0x0001, 0x0003];
        let negotiation =
            Negotiation::run(ConsoleAdapter::new(FakeEnv::new(), console.clone()), Options::default());

        assert_eq!(negotiation.palette, Palette::ansi());
        assert_eq!(console.current_mode(Stream::Output), 0x0005);
        assert_eq!(console.current_mode(Stream::Error), 0x0007);

        drop(negotiation);
        assert_eq!(console.current_mode(Stream::Output), 0x0001);
        assert_eq!(console.current_mode(Stream::Error), 0x0003);
    }

    #[test]
    fn test_console_degrades() {
        let console = FakeConsole::new();
        console.state().readable[Stream::Error as usize] = false;
        let negotiation =
            Negotiation::run(ConsoleAdapter::new(FakeEnv::new(), console.clone()), Options::default());
        assert!(negotiation.palette.is_plain());
        drop(negotiation);
        assert!(console.writes().is_empty());

        let console = FakeConsole::new();
        console.state().version = Some(OsVersion::new(10, 0, 10_240));
        let negotiation =
            Negotiation::run(ConsoleAdapter::new(FakeEnv::new(), console.clone()), Options::default());
        assert!(negotiation.palette.is_plain());
        assert!(console.writes().is_empty());
        drop(negotiation);
        assert_eq!(console.current_mode(Stream::Output), 0x0003);
        assert_eq!(console.current_mode(Stream::Error), 0x0003);
    }

    #[test]
    fn test_restore_before_renegotiate() {
        let registry = Registry::new();
        let console = FakeConsole::new();
        let adapter = || ConsoleAdapter::new(FakeEnv::new(), console.clone());

        let first = registry.negotiate(adapter, Options::default());
        assert_eq!(first.palette, Palette::ansi());
        assert_eq!(console.current_mode(Stream::Output), 0x0007);

        std::thread::scope(|scope| {
            let current = registry.current.lock().unwrap();
            let releaser = scope.spawn(|| registry.release(first));

            // Releasing waits for the lock, so the negotiation stays visible
            // until its restoration is done.
            std::thread::sleep(std::time::Duration::from_millis(20));
            assert!(current.upgrade().is_some());
            drop(current);
            releaser.join().unwrap();
        });

        assert_eq!(console.current_mode(Stream::Output), 0x0003);
        assert_eq!(console.current_mode(Stream::Error), 0x0003);

        let second = registry.negotiate(adapter, Options::default());
        assert_eq!(second.palette, Palette::ansi());
        assert_eq!(console.current_mode(Stream::Output), 0x0007);
        assert_eq!(console.current_mode(Stream::Error), 0x0007);

        registry.release(second);
        assert_eq!(console.current_mode(Stream::Output), 0x0003);
        assert_eq!(console.current_mode(Stream::Error), 0x0003);
    }

    #[test]
    fn test_concurrent_renegotiation() {
        let registry = Registry::new();
        let console = FakeConsole::new();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        let negotiation = registry.negotiate(
                            || ConsoleAdapter::new(FakeEnv::new(), console.clone()),
                            Options::default(),
                        );
                        assert_eq!(negotiation.palette, Palette::ansi());
                        assert_eq!(console.current_mode(Stream::Output), 0x0007);
                        registry.release(negotiation);
                    }
                });
            }
        });

        assert_eq!(console.current_mode(Stream::Output), 0x0003);
        assert_eq!(console.current_mode(Stream::Error), 0x0003);
    }

    #[traced_test]
    #[test]
    fn test_logs_reason() {
        let mut env = FakeEnv::new();
        env.set("NO_COLOR", "");
        assert!(stream(env, true).is_plain());
        assert!(logs_contain("colors disabled by NO_COLOR"));

        let mut env = FakeEnv::new();
        env.set("TERM", "xterm-256color");
        assert!(!stream(env, true).is_plain());
        assert!(logs_contain("terminal supports ANSI colors"));
    }

    #[test]
    fn test_shared() {
        let first = Colors::negotiate();
        let palette = *first.palette();
        for _ in 0..3 {
            assert_eq!(first.palette().red(), palette.red());
        }

        let second = Colors::with_options(Options::never());
        assert!(Arc::ptr_eq(&*first.inner, &*second.inner));
        assert_eq!(second.options().mode(), first.options().mode());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let first = first.clone();
                std::thread::spawn(move || {
                    let colors = Colors::negotiate();
                    Arc::ptr_eq(&*first.inner, &*colors.inner)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }

        drop(first);
        drop(second);

        let third = Colors::with_options(Options::never());
        assert!(!third.supports_color());
        assert!(third.palette().iter().all(|(_, s)| s.is_empty()));
    }
}
