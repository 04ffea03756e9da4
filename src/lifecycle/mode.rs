//! Mode selector.
//!
//! The selector is read once from the command line and never changes.
//! Parsing is lenient: garbage reads as 0 and out-of-range values behave
//! like 0, so the probe never rejects its argument.

use std::fmt;

/// Timing regime for one probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 0: leave the provider loaded.
    #[default]
    NoUnload,
    /// 1: unload right after loading.
    UnloadInline,
    /// 2: unload from `atexit`, registered before library init.
    ProcessHookBeforeInit,
    /// 3: unload from `atexit`, registered after library init.
    ProcessHookAfterInit,
    /// 4: unload from `OPENSSL_atexit`, registered after library init.
    LibraryHook,
    /// 5: call process-wide cleanup, never unload.
    Cleanup,
}

impl Mode {
    /// Map a raw selector; anything outside 0..=5 is [`Mode::NoUnload`].
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Mode::UnloadInline,
            2 => Mode::ProcessHookBeforeInit,
            3 => Mode::ProcessHookAfterInit,
            4 => Mode::LibraryHook,
            5 => Mode::Cleanup,
            _ => Mode::NoUnload,
        }
    }

    /// Numeric selector of this mode.
    pub fn as_raw(self) -> i64 {
        match self {
            Mode::NoUnload => 0,
            Mode::UnloadInline => 1,
            Mode::ProcessHookBeforeInit => 2,
            Mode::ProcessHookAfterInit => 3,
            Mode::LibraryHook => 4,
            Mode::Cleanup => 5,
        }
    }

    /// Parse the command-line selector.
    pub fn parse_arg(arg: Option<&str>) -> Self {
        Self::from_raw(arg.map(parse_leading_int).unwrap_or(0))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::NoUnload => "no-unload",
            Mode::UnloadInline => "unload-inline",
            Mode::ProcessHookBeforeInit => "atexit-before-init",
            Mode::ProcessHookAfterInit => "atexit-after-init",
            Mode::LibraryHook => "openssl-atexit",
            Mode::Cleanup => "cleanup",
        };
        write!(f, "{} ({})", self.as_raw(), name)
    }
}

/// Read a leading decimal integer.
///
/// Skips leading whitespace, accepts one sign, then consumes digits up to
/// the first non-digit. No digits yields 0; overflow saturates.
pub fn parse_leading_int(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}
