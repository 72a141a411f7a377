//! # Pretty 🌸 ANSI
//!
//! \[  [**Docs.rs**](https://docs.rs/prettyansi/latest/prettyansi/)
//! | [**Rust Crate**](https://crates.io/crates/prettyansi)
//! | [**Repository**](https://github.com/apparebit/prettypretty)
//! \]
//!
//! This crate answers one question: **May this process write ANSI color
//! escape sequences to standard output and standard error?** Its only
//! dependencies are [`tracing`](https://crates.io/crates/tracing) and the
//! low-level crate enabling system calls, i.e.,
//! [`libc`](https://crates.io/crates/libc) on Unix and
//! [`windows-sys`](https://crates.io/crates/windows-sys) on Windows.
//!
//! Using it is easy:
//!
//!   * Negotiate once with [`Colors::negotiate`] or [`Colors::with_options`].
//!   * Concatenate the strings of its [`Palette`] around text.
//!   * Drop the [`Colors`] before exiting.
//!
//! A palette either has all of its escape sequences or none of them. When
//! colors are not supported, every string is empty and output stays plain.
//! Negotiation never fails and never prints anything. It does, however, log
//! why colors ended up disabled through `tracing` at the debug level.
//!
//!
//! # Example
//!
//! ```
//! # use prettyansi::Colors;
//! let colors = Colors::negotiate();
//! let palette = colors.palette();
//!
//! let line = format!("{}error:{} file not found", palette.red(), palette.reset());
//! if colors.supports_color() {
//!     assert_eq!(line, "\x1b[31merror:\x1b[0m file not found");
//! } else {
//!     assert_eq!(line, "error: file not found");
//! }
//! ```
//!
//!
//! # Detection
//!
//! Independent of platform, a defined `NO_COLOR` environment variable
//! disables colors, even if it is empty. Beyond that, detection differs
//! between platforms:
//!
//!   * On Unix, standard output must be a terminal and `TERM` must be defined
//!     and not be `dumb`.
//!   * On Windows, standard output and standard error must both be consoles,
//!     and Windows must be version 10 build 10586 or later. Negotiation then
//!     turns on `ENABLE_VIRTUAL_TERMINAL_PROCESSING` for both and restores
//!     their original modes when the last [`Colors`] clone is dropped.
//!
//! Since Rust does not run destructors for statics, the negotiated [`Colors`]
//! should live in `main`, not in a static.

mod adapter;
mod colors;
mod env;
mod err;
pub mod opt;
mod palette;
mod sys;

pub use colors::Colors;
pub use palette::{Code, Palette};
