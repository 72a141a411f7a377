#![cfg_attr(target_family = "windows", allow(dead_code))]

use super::Adapter;
use crate::env::Environment;
use crate::err::{ErrorKind, Result};
use crate::opt::Options;

/// A probe for whether standard output is a terminal.
pub(crate) trait TtyProbe {
    /// Determine whether standard output is connected to a terminal.
    fn is_terminal(&self) -> bool;
}

/// The adapter for terminals that always interpret escape sequences.
///
/// Color support only depends on the environment and on standard output
/// being a terminal. Since nothing is reconfigured, there is nothing to
/// restore either.
#[derive(Debug, Default)]
pub(crate) struct StreamAdapter<E, T> {
    env: E,
    tty: T,
}

impl<E: Environment, T: TtyProbe> StreamAdapter<E, T> {
    pub fn new(env: E, tty: T) -> Self {
        Self { env, tty }
    }
}

impl<E: Environment, T: TtyProbe> Adapter for StreamAdapter<E, T> {
    fn detect_support(&mut self, _: &Options) -> Result<()> {
        if self.env.is_defined("NO_COLOR") {
            return Err(ErrorKind::EnvironmentDisabled.into());
        } else if !self.tty.is_terminal() {
            return Err(ErrorKind::NotATerminal.into());
        } else if !self.env.is_defined("TERM") || self.env.has_value("TERM", "dumb") {
            return Err(ErrorKind::UnsupportedTerminalType.into());
        }

        Ok(())
    }

    #[inline]
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn restore(&mut self) {}
}

#[cfg(test)]
mod test {
    use super::{Adapter, StreamAdapter, TtyProbe};
    use crate::env::FakeEnv;
    use crate::err::ErrorKind;
    use crate::opt::Options;

    #[derive(Debug)]
    pub(crate) struct FakeTty(pub bool);

    impl TtyProbe for FakeTty {
        fn is_terminal(&self) -> bool {
            self.0
        }
    }

    fn detect(env: FakeEnv, tty: bool) -> Option<ErrorKind> {
        StreamAdapter::new(env, FakeTty(tty))
            .detect_support(&Options::default())
            .err()
            .map(|e| e.kind())
    }

    #[test]
    fn test_no_color_wins() {
        for value in ["", "1", "false"] {
            for term in ["xterm-256color", "dumb"] {
                for tty in [true, false] {
                    let mut env = FakeEnv::new();
                    env.set("NO_COLOR", value).set("TERM", term);
                    assert_eq!(detect(env, tty), Some(ErrorKind::EnvironmentDisabled));
                }
            }
        }
    }

    #[test]
    fn test_not_a_terminal() {
        let mut env = FakeEnv::new();
        env.set("TERM", "xterm-256color");
        assert_eq!(detect(env, false), Some(ErrorKind::NotATerminal));
    }

    #[test]
    fn test_term() {
        assert_eq!(
            detect(FakeEnv::new(), true),
            Some(ErrorKind::UnsupportedTerminalType)
        );

        let mut env = FakeEnv::new();
        env.set("TERM", "dumb");
        assert_eq!(detect(env, true), Some(ErrorKind::UnsupportedTerminalType));

        let mut env = FakeEnv::new();
        env.set("TERM", "xterm-256color");
        assert_eq!(detect(env, true), None);

        // Only an undefined or dumb TERM disqualifies.
        let mut env = FakeEnv::new();
        env.set("TERM", "");
        assert_eq!(detect(env, true), None);
    }
}

#[cfg(test)]
pub(crate) use test::FakeTty;
