//! Helper module with the options for color negotiation.
//!
//! This module provides the options for negotiating color support and the
//! corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use prettyansi::opt::{Mode, Options, OsVersion};
//! let options = Options::builder()
//!     .mode(Mode::Never)
//!     .threshold(OsVersion::new(10, 0, 14393))
//!     .build();
//!
//! assert_eq!(options.mode(), Mode::Never);
//! assert_eq!(options.threshold().build(), 14393);
//! ```

/// The negotiation mode.
///
///   * __Auto mode__ inspects the environment and, on Windows, the console to
///     determine whether colors are supported. It is the default.
///
///   * __Never mode__ skips detection altogether. It doesn't touch the console
///     configuration and always results in a plain palette. It is the natural
///     choice for a `--color=never` command line option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Detect color support.
    #[default]
    Auto,
    /// Never use colors.
    Never,
}

/// A Windows version.
///
/// Windows 10 version 1511, i.e., build 10586, was the first release of the
/// operating system whose console supports
/// `ENABLE_VIRTUAL_TERMINAL_PROCESSING`. That also is the default threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OsVersion {
    major: u32,
    minor: u32,
    build: u32,
}

impl OsVersion {
    /// Windows 10 version 1511.
    pub const WINDOWS_10_1511: OsVersion = OsVersion::new(10, 0, 10_586);

    /// Create a new version.
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Get the major version.
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Get the minor version.
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Get the build number.
    pub const fn build(&self) -> u32 {
        self.build
    }

    /// Determine whether this version meets the threshold.
    ///
    /// Both the major version and the build number must be at least as large
    /// as the threshold's. The minor version is ignored, since Windows 10 and
    /// 11 both report 0.
    pub const fn supports(&self, threshold: OsVersion) -> bool {
        threshold.major <= self.major && threshold.build <= self.build
    }
}

impl core::fmt::Display for OsVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

#[derive(Clone, Debug)]
struct OptionData {
    mode: Mode,
    threshold: OsVersion,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            mode: Mode::Auto,
            threshold: OsVersion::WINDOWS_10_1511,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the mode.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.0.mode = mode;
        self
    }

    /// Set the minimum Windows version for enabling virtual terminal
    /// processing.
    pub fn threshold(&mut self, threshold: OsVersion) -> &mut Self {
        self.0.threshold = threshold;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but without colors.
    pub fn never() -> Options {
        Self::builder().mode(Mode::Never).build()
    }

    /// Get the mode.
    pub fn mode(&self) -> Mode {
        self.0.mode
    }

    /// Get the minimum Windows version.
    pub fn threshold(&self) -> OsVersion {
        self.0.threshold
    }
}
