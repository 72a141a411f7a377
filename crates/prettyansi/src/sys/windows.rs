use std::io::Result;
use std::ptr::from_mut;

use windows_sys::Wdk::System::SystemServices::RtlGetVersion;
use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
use windows_sys::Win32::System::Console::{self, CONSOLE_MODE as ConsoleMode};
use windows_sys::Win32::System::SystemInformation::OSVERSIONINFOW;

use super::into_result::IntoResult;
use crate::adapter::{ConsoleApi, Stream};
use crate::opt::OsVersion;

/// The Windows console.
///
/// This type is stateless. It looks up the standard handles again for every
/// call, just like restoration at process exit would have to.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WinConsole;

impl ConsoleApi for WinConsole {
    type Handle = HANDLE;

    fn handle(&self, stream: Stream) -> Option<HANDLE> {
        let id = match stream {
            Stream::Output => Console::STD_OUTPUT_HANDLE,
            Stream::Error => Console::STD_ERROR_HANDLE,
        };

        // SAFETY: GetStdHandle has no preconditions.
        let handle = unsafe { Console::GetStdHandle(id) };
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            None
        } else {
            Some(handle)
        }
    }

    fn mode(&self, handle: HANDLE) -> Result<u32> {
        let mut mode: ConsoleMode = 0;
        // SAFETY: The handle is valid and mode is a live, writable local.
        unsafe { Console::GetConsoleMode(handle, from_mut(&mut mode)) }.into_result()?;
        Ok(mode)
    }

    fn set_mode(&self, handle: HANDLE, mode: u32) -> Result<()> {
        // SAFETY: The handle is valid; invalid modes are rejected by the call.
        unsafe { Console::SetConsoleMode(handle, mode) }.into_result()
    }

    fn version(&self) -> Option<OsVersion> {
        // GetVersionExW lies to applications without a manifest, hence
        // RtlGetVersion.
        // SAFETY: OSVERSIONINFOW is plain old data.
        let mut info: OSVERSIONINFOW = unsafe { core::mem::zeroed() };
        info.dwOSVersionInfoSize = core::mem::size_of::<OSVERSIONINFOW>() as u32;

        // SAFETY: info is a live, writable local with its size filled in.
        let status = unsafe { RtlGetVersion(from_mut(&mut info)) };
        if status < 0 {
            return None;
        }

        Some(OsVersion::new(
            info.dwMajorVersion,
            info.dwMinorVersion,
            info.dwBuildNumber,
        ))
    }
}
