//! Platform probes for path readability and writability.
//!
//! On unix these go through `access(2)`, which answers for the real uid and
//! works uniformly for files and directories. Elsewhere the probes fall back
//! to what the standard library can observe.

use std::path::Path;

#[cfg(unix)]
pub(crate) fn readable(path: &Path) -> bool {
    access(path, libc::R_OK)
}

#[cfg(unix)]
pub(crate) fn writable(path: &Path) -> bool {
    access(path, libc::W_OK)
}

#[cfg(unix)]
fn access(path: &Path, mode: libc::c_int) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    // A path with an interior NUL cannot exist on disk.
    let Ok(path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(path.as_ptr(), mode) == 0 }
}

#[cfg(not(unix))]
pub(crate) fn readable(path: &Path) -> bool {
    if path.is_dir() {
        std::fs::read_dir(path).is_ok()
    } else {
        std::fs::File::open(path).is_ok()
    }
}

#[cfg(not(unix))]
pub(crate) fn writable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_neither_readable_nor_writable() {
        let path = Path::new("/no/such/path/anywhere");
        assert!(!readable(path));
        assert!(!writable(path));
    }

    #[test]
    fn temp_dir_is_readable_and_writable() {
        let dir = std::env::temp_dir();
        assert!(readable(&dir));
        assert!(writable(&dir));
    }
}
