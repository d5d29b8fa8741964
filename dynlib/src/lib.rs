use std::ffi::{CStr, CString, c_void};
use std::mem::transmute_copy;
use std::ptr::NonNull;
use std::{error, fmt};

#[cfg(unix)]
use libc::{dlclose, dlerror, dlopen, dlsym};
#[cfg(windows)]
use winapi::um::{
    errhandlingapi::GetLastError,
    libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryA},
};

#[derive(Debug)]
pub enum Error {
    CouldNotOpen { filename: CString, reason: String },
    CouldNotLookup { name: CString, reason: String },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CouldNotOpen { filename, reason } => {
                f.write_fmt(format_args!("could not open {filename:?}: {reason}"))
            }
            Self::CouldNotLookup { name, reason } => {
                f.write_fmt(format_args!("could not lookup {name:?}: {reason}"))
            }
        }
    }
}

#[cfg(unix)]
unsafe fn last_error() -> String {
    let err = unsafe { dlerror() };
    if err.is_null() {
        "unknown error".to_string()
    } else {
        unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned()
    }
}

#[cfg(windows)]
unsafe fn last_error() -> String {
    format!("error code {:#x}", unsafe { GetLastError() })
}

pub struct DynLib(NonNull<c_void>);

impl DynLib {
    pub fn open(filename: &CStr) -> Result<Self, Error> {
        #[cfg(unix)]
        let handle = unsafe { dlopen(filename.as_ptr(), libc::RTLD_LAZY) };
        #[cfg(windows)]
        let handle = unsafe { LoadLibraryA(filename.as_ptr()) }.cast::<c_void>();

        NonNull::new(handle)
            .map(Self)
            .ok_or_else(|| Error::CouldNotOpen {
                filename: filename.to_owned(),
                reason: unsafe { last_error() },
            })
    }

    /// tries each of the filenames in order and returns the first library that could be opened,
    /// or the error of the last attempt.
    pub fn open_first(filenames: &[&CStr]) -> Result<Self, Error> {
        let Some((last, rest)) = filenames.split_last() else {
            return Err(Error::CouldNotOpen {
                filename: CString::default(),
                reason: "no filenames to try".to_string(),
            });
        };
        for filename in rest {
            if let Ok(dynlib) = Self::open(filename) {
                return Ok(dynlib);
            }
        }
        Self::open(last)
    }

    /// looks up a symbol and reinterprets its address as `F`, which is expected to be a function
    /// pointer (or another pointer-sized type).
    ///
    /// NOTE: `F` not being pointer-sized fails to compile.
    pub fn lookup<F: Sized>(&self, name: &CStr) -> Result<F, Error> {
        const { assert!(size_of::<F>() == size_of::<*mut c_void>()) };

        #[cfg(unix)]
        let addr = unsafe {
            _ = dlerror();

            let addr = dlsym(self.0.as_ptr(), name.as_ptr());

            let err = dlerror();
            if !err.is_null() {
                // NOTE: the string belongs to the dynamic linker, it must not be freed.
                return Err(Error::CouldNotLookup {
                    name: name.to_owned(),
                    reason: CStr::from_ptr(err).to_string_lossy().into_owned(),
                });
            }
            addr
        };
        #[cfg(windows)]
        let addr = {
            let addr = unsafe { GetProcAddress(self.0.as_ptr().cast(), name.as_ptr()) };
            if addr.is_null() {
                return Err(Error::CouldNotLookup {
                    name: name.to_owned(),
                    reason: unsafe { last_error() },
                });
            }
            addr.cast::<c_void>()
        };

        Ok(unsafe { transmute_copy(&addr) })
    }

    /// same as [`DynLib::lookup`], but untyped; a missing symbol is simply `None`.
    pub fn lookup_ptr(&self, name: &CStr) -> Option<NonNull<c_void>> {
        #[cfg(unix)]
        let addr = unsafe { dlsym(self.0.as_ptr(), name.as_ptr()) };
        #[cfg(windows)]
        let addr =
            unsafe { GetProcAddress(self.0.as_ptr().cast(), name.as_ptr()) }.cast::<c_void>();

        NonNull::new(addr)
    }
}

impl Drop for DynLib {
    fn drop(&mut self) {
        #[cfg(unix)]
        unsafe {
            dlclose(self.0.as_ptr());
        }
        #[cfg(windows)]
        unsafe {
            FreeLibrary(self.0.as_ptr().cast());
        }
    }
}

#[macro_export]
macro_rules! opaque_struct {
    ($name:ident) => {
        #[repr(C)]
        pub struct $name {
            _data: [u8; 0],
            _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
        }
    };
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[test]
fn test_open_and_lookup() {
    let dynlib = DynLib::open(c"libc.so.6").unwrap();

    let strlen = dynlib
        .lookup::<unsafe extern "C" fn(*const std::ffi::c_char) -> usize>(c"strlen")
        .unwrap();
    assert_eq!(unsafe { strlen(c"wgl".as_ptr()) }, 3);

    let strlen_ptr = dynlib.lookup::<*mut c_void>(c"strlen").unwrap();
    assert_eq!(dynlib.lookup_ptr(c"strlen").map(NonNull::as_ptr), Some(strlen_ptr));
    assert_eq!(strlen_ptr, strlen as *mut c_void);
    assert!(dynlib.lookup_ptr(c"definitely_not_a_symbol").is_none());
    assert!(matches!(
        dynlib.lookup::<unsafe extern "C" fn()>(c"definitely_not_a_symbol"),
        Err(Error::CouldNotLookup { .. })
    ));
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
#[test]
fn test_open_first() {
    assert!(DynLib::open_first(&[c"libdefinitely-missing.so", c"libc.so.6"]).is_ok());

    match DynLib::open_first(&[c"libdefinitely-missing.so", c"libalso-missing.so"]) {
        Err(Error::CouldNotOpen { filename, .. }) => {
            assert_eq!(filename.as_c_str(), c"libalso-missing.so")
        }
        Err(err) => panic!("unexpected error: {err}"),
        Ok(_) => panic!("expected an error"),
    }
    assert!(DynLib::open_first(&[]).is_err());
}
