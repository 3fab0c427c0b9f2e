#[cfg(target_family = "windows")]
pub(crate) type RawHandle = std::os::windows::io::RawHandle;

#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "windows")]
mod util;
#[cfg(target_family = "windows")]
mod windows;

#[cfg(target_family = "unix")]
pub(crate) use self::unix::{
    input_codepage, output_codepage, set_input_codepage, set_output_codepage, RawConsole,
};
#[cfg(target_family = "windows")]
pub(crate) use self::windows::{
    input_codepage, output_codepage, set_input_codepage, set_output_codepage, RawConsole,
};
