use std::ffi::{CStr, c_char, c_void};
use std::ptr::null;

use dynlib::DynLib;

#[cfg(windows)]
const LIBRARY_FILENAMES: &[&CStr] = &[c"opengl32.dll"];
#[cfg(target_os = "macos")]
const LIBRARY_FILENAMES: &[&CStr] = &[
    c"../Frameworks/OpenGL.framework/OpenGL",
    c"/Library/Frameworks/OpenGL.framework/OpenGL",
    c"/System/Library/Frameworks/OpenGL.framework/OpenGL",
    c"/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL",
];
#[cfg(all(unix, not(target_os = "macos")))]
const LIBRARY_FILENAMES: &[&CStr] = &[c"libGL.so.1", c"libGL.so"];

#[cfg(windows)]
const GET_PROC_ADDRESS: Option<&CStr> = Some(c"wglGetProcAddress");
#[cfg(target_os = "macos")]
const GET_PROC_ADDRESS: Option<&CStr> = None;
#[cfg(all(unix, not(target_os = "macos")))]
const GET_PROC_ADDRESS: Option<&CStr> = Some(c"glXGetProcAddressARB");

#[cfg(windows)]
type GetProcAddress = unsafe extern "system" fn(*const c_char) -> *const c_void;
#[cfg(not(windows))]
type GetProcAddress = unsafe extern "C" fn(*const c_char) -> *const c_void;

/// the system gl library together with its vendor proc address function (if the platform has
/// one).
pub struct Library {
    get_proc_address: Option<GetProcAddress>,
    dynlib: DynLib,
}

impl Library {
    pub fn open() -> Result<Self, dynlib::Error> {
        Self::open_from(LIBRARY_FILENAMES, GET_PROC_ADDRESS)
    }

    /// opens the first of `filenames` that can be opened. if `get_proc_address` is given, the
    /// library must export it.
    pub fn open_from(
        filenames: &[&CStr],
        get_proc_address: Option<&CStr>,
    ) -> Result<Self, dynlib::Error> {
        let dynlib = DynLib::open_first(filenames)?;
        let get_proc_address = get_proc_address
            .map(|name| dynlib.lookup::<GetProcAddress>(name))
            .transpose()?;

        log::debug!(
            "opened gl library (proc address function: {})",
            get_proc_address.is_some()
        );

        Ok(Self {
            get_proc_address,
            dynlib,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_get_proc_address(dynlib: DynLib, get_proc_address: GetProcAddress) -> Self {
        Self {
            get_proc_address: Some(get_proc_address),
            dynlib,
        }
    }

    /// resolves `name` with the proc address function, falls back to the library's exports.
    ///
    /// NOTE: extension functions often are only reachable through the proc address function,
    /// core 1.0 functions on windows only through the exports.
    pub fn get_proc(&self, name: &CStr) -> *const c_void {
        let ptr = self
            .get_proc_address
            .map_or(null(), |get_proc_address| unsafe {
                get_proc_address(name.as_ptr())
            });
        if !ptr.is_null() {
            return ptr;
        }
        self.dynlib
            .lookup_ptr(name)
            .map_or(null(), |ptr| ptr.as_ptr().cast_const())
    }
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[test]
fn test_get_proc_falls_back_to_exports() {
    let library = Library::open_from(&[c"libc.so.6"], None).unwrap();
    assert!(!library.get_proc(c"strlen").is_null());
    assert!(library.get_proc(c"wglSwapIntervalEXT").is_null());
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[test]
fn test_open_requires_proc_address_function() {
    assert!(matches!(
        Library::open_from(&[c"libc.so.6"], Some(c"glXGetProcAddressARB")),
        Err(dynlib::Error::CouldNotLookup { .. })
    ));
    assert!(matches!(
        Library::open_from(&[c"libdefinitely-missing.so"], None),
        Err(dynlib::Error::CouldNotOpen { .. })
    ));
}
