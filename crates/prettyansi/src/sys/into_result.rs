use std::io::Result;

use windows_sys::Win32::Foundation::BOOL;

/// Trait to convert a status code into a Rust result.
pub(crate) trait IntoResult {
    /// The target type.
    type Target;

    /// Convert this status code into a Rust result.
    fn into_result(self) -> Result<Self::Target>;
}

impl IntoResult for BOOL {
    type Target = ();

    #[inline]
    fn into_result(self) -> Result<Self::Target> {
        if self == 0 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}
