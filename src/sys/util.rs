use std::io::Result;

/// Trait to determine whether a status code is an error.
pub(crate) trait IsError {
    /// Determine if this value is an error.
    fn is_error(&self) -> bool;
}

impl IsError for i32 {
    #[inline]
    fn is_error(&self) -> bool {
        // Win32 BOOL: zero signals failure.
        *self == 0
    }
}

/// Trait to convert a status code into a Rust result.
pub(crate) trait IntoResult {
    /// The target type.
    type Target;

    /// Convert this status code into a Rust result.
    fn into_result(self) -> Result<Self::Target>;
}

impl IntoResult for i32 {
    type Target = u32;

    fn into_result(self) -> Result<Self::Target> {
        if self.is_error() {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(self as Self::Target)
        }
    }
}
