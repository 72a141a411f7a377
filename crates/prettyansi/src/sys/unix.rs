use crate::adapter::TtyProbe;

/// Standard output's file descriptor.
#[derive(Debug, Default)]
pub(crate) struct StdoutTty;

impl TtyProbe for StdoutTty {
    fn is_terminal(&self) -> bool {
        // SAFETY: isatty only inspects the file descriptor, which need not be
        // open.
        unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
    }
}

#[cfg(test)]
mod test {
    use super::{StdoutTty, TtyProbe};
    use std::io::IsTerminal;

    #[test]
    fn test_agrees_with_std() {
        assert_eq!(StdoutTty.is_terminal(), std::io::stdout().is_terminal());
    }
}
