//! The fixed set of ANSI escape sequences.
//!
//! A [`Palette`] maps each [`Code`] to its escape sequence or, if colors are
//! not supported, to the empty string. Since a palette only records whether
//! it is enabled, it is either complete or entirely empty. There is no way to
//! construct a palette with some sequences and not others.

/// The name of an escape sequence in the palette.
///
/// Besides the eight base colors for the foreground, the palette includes
/// codes for resetting all attributes, for bold (or bright) text, and for
/// black text on a white background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    /// Reset all attributes and colors.
    Reset,
    /// Bold or bright text.
    Bright,
    /// Black text.
    Black,
    /// Red text.
    Red,
    /// Green text.
    Green,
    /// Yellow text.
    Yellow,
    /// Blue text.
    Blue,
    /// Magenta text.
    Magenta,
    /// Cyan text.
    Cyan,
    /// White text.
    White,
    /// Black text on a white background.
    BlackOnWhite,
}

impl Code {
    /// All codes in palette order.
    pub const ALL: [Code; 11] = [
        Code::Reset,
        Code::Bright,
        Code::Black,
        Code::Red,
        Code::Green,
        Code::Yellow,
        Code::Blue,
        Code::Magenta,
        Code::Cyan,
        Code::White,
        Code::BlackOnWhite,
    ];

    /// Get a human-readable name for this code.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Reset => "reset",
            Self::Bright => "bright",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BlackOnWhite => "white background black foreground",
        }
    }

    /// Get the escape sequence for this code.
    ///
    /// Tools parsing output depend on these exact sequences. They must not
    /// change.
    pub const fn sequence(&self) -> &'static str {
        match *self {
            Self::Reset => "\x1b[0m",
            Self::Bright => "\x1b[1m",
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::BlackOnWhite => "\x1b[30;47m",
        }
    }
}

/// A palette of possibly empty escape sequences.
///
/// Call sites concatenate the palette's strings around text. With a plain
/// palette, that concatenation leaves the text unchanged.
///
/// ```
/// # use prettyansi::Palette;
/// let ansi = Palette::ansi();
/// assert_eq!(format!("{}ok{}", ansi.green(), ansi.reset()), "\x1b[32mok\x1b[0m");
///
/// let plain = Palette::plain();
/// assert_eq!(format!("{}ok{}", plain.green(), plain.reset()), "ok");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Create a palette with all escape sequences.
    pub const fn ansi() -> Self {
        Self { enabled: true }
    }

    /// Create a palette with only empty strings.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Create the palette for the given capability, with all escape
    /// sequences if colors are supported and only empty strings otherwise.
    pub const fn new(supports_color: bool) -> Self {
        Self {
            enabled: supports_color,
        }
    }

    /// Determine whether this palette is plain.
    pub const fn is_plain(&self) -> bool {
        !self.enabled
    }

    /// Get the string for the given code.
    pub const fn get(&self, code: Code) -> &'static str {
        if self.enabled {
            code.sequence()
        } else {
            ""
        }
    }

    /// Iterate over all codes and their strings.
    pub fn iter(&self) -> impl Iterator<Item = (Code, &'static str)> {
        let this = *self;
        Code::ALL.into_iter().map(move |code| (code, this.get(code)))
    }

    /// Get the string for resetting all attributes and colors.
    pub const fn reset(&self) -> &'static str {
        self.get(Code::Reset)
    }

    /// Get the string for bold or bright text.
    pub const fn bright(&self) -> &'static str {
        self.get(Code::Bright)
    }

    /// Get the string for black text.
    pub const fn black(&self) -> &'static str {
        self.get(Code::Black)
    }

    /// Get the string for red text.
    pub const fn red(&self) -> &'static str {
        self.get(Code::Red)
    }

    /// Get the string for green text.
    pub const fn green(&self) -> &'static str {
        self.get(Code::Green)
    }

    /// Get the string for yellow text.
    pub const fn yellow(&self) -> &'static str {
        self.get(Code::Yellow)
    }

    /// Get the string for blue text.
    pub const fn blue(&self) -> &'static str {
        self.get(Code::Blue)
    }

    /// Get the string for magenta text.
    pub const fn magenta(&self) -> &'static str {
        self.get(Code::Magenta)
    }

    /// Get the string for cyan text.
    pub const fn cyan(&self) -> &'static str {
        self.get(Code::Cyan)
    }

    /// Get the string for white text.
    pub const fn white(&self) -> &'static str {
        self.get(Code::White)
    }

    /// Get the string for black text on a white background.
    pub const fn black_on_white(&self) -> &'static str {
        self.get(Code::BlackOnWhite)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
