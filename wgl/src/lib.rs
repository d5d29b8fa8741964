//! runtime loader for wgl extensions.
//!
//! [`Wgl`] queries the extensions string, records which of the known [`Extension`]s are
//! supported and resolves the entry points of those that are. entry points of unsupported
//! extensions stay unset.

use std::ffi::{CStr, c_char, c_void};
use std::ptr::NonNull;
use std::{error, fmt, mem};

mod commands;
mod enums;
mod extensions;
mod library;
pub mod types;

pub use commands::Command;
pub use enums::*;
pub use extensions::{Extension, has_extension};
pub use library::Library;
pub use types::*;

#[derive(Debug)]
pub enum LoadError {
    CouldNotLoadLibrary(dynlib::Error),
    /// neither wglGetExtensionsStringARB nor wglGetExtensionsStringEXT could be resolved; the
    /// extension mechanism itself is not supported.
    NoExtensionsStringQuery,
    NoExtensionsString,
}

impl error::Error for LoadError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CouldNotLoadLibrary(err) => {
                f.write_fmt(format_args!("could not load gl library: {err}"))
            }
            Self::NoExtensionsStringQuery => {
                f.write_str("could not resolve any extensions string query function")
            }
            Self::NoExtensionsString => f.write_str("could not query extensions string"),
        }
    }
}

type GetExtensionsStringARB = unsafe extern "system" fn(hdc: HDC) -> *const c_char;
type GetExtensionsStringEXT = unsafe extern "system" fn() -> *const c_char;

// NOTE: these are resolved before it is known whether the extensions are advertised, so they are
// kept apart from the command slots.
#[derive(Default, Clone, Copy)]
struct ExtensionsStringQueries {
    arb: Option<NonNull<c_void>>,
    ext: Option<NonNull<c_void>>,
}

impl ExtensionsStringQueries {
    /// prefers the arb variant when there is a device context to scope the query to; falls back
    /// to the ext variant.
    unsafe fn query<'a>(&self, hdc: HDC) -> Option<&'a CStr> {
        let from_arb = || {
            let arb = self.arb.filter(|_| hdc != INVALID_HDC)?;
            let arb =
                unsafe { mem::transmute::<*mut c_void, GetExtensionsStringARB>(arb.as_ptr()) };
            let ptr = unsafe { arb(hdc) };
            (!ptr.is_null()).then_some(ptr)
        };
        let from_ext = || {
            let ext = self.ext?;
            let ext =
                unsafe { mem::transmute::<*mut c_void, GetExtensionsStringEXT>(ext.as_ptr()) };
            let ptr = unsafe { ext() };
            (!ptr.is_null()).then_some(ptr)
        };
        from_arb()
            .or_else(from_ext)
            .map(|ptr| unsafe { CStr::from_ptr(ptr) })
    }
}

#[cold]
#[inline(never)]
fn null_fn_ptr_panic(command: Command) -> ! {
    panic!("function was not loaded: {:?}", command.name())
}

/// loader context: capability flags, entry point slots and the device context the extensions
/// string was queried for.
///
/// resolved entry points are only valid for as long as the library they came from stays loaded.
pub struct Wgl {
    library: Option<Library>,
    hdc: HDC,
    queries: ExtensionsStringQueries,
    extensions: [bool; Extension::COUNT],
    commands: [Option<NonNull<c_void>>; Command::COUNT],
}

impl Default for Wgl {
    fn default() -> Self {
        Self::new()
    }
}

impl Wgl {
    pub fn new() -> Self {
        Self {
            library: None,
            hdc: INVALID_HDC,
            queries: ExtensionsStringQueries::default(),
            extensions: [false; Extension::COUNT],
            commands: [None; Command::COUNT],
        }
    }

    fn reset(&mut self) {
        self.hdc = INVALID_HDC;
        self.queries = ExtensionsStringQueries::default();
        self.extensions = [false; Extension::COUNT];
        self.commands = [None; Command::COUNT];
    }

    /// opens the system gl library and loads everything with its resolver.
    ///
    /// on failure the library is released and the context is left empty.
    pub fn load(&mut self, hdc: HDC) -> Result<(), LoadError> {
        self.unload();
        self.reset();

        let library = Library::open().map_err(LoadError::CouldNotLoadLibrary)?;
        self.load_from(library, hdc)
    }

    /// same as [`Wgl::load`], but with an already opened library. the library is retained on
    /// success and released on failure.
    pub fn load_from(&mut self, library: Library, hdc: HDC) -> Result<(), LoadError> {
        self.unload();

        unsafe { self.load_with(|name| library.get_proc(name), hdc) }?;
        self.library = Some(library);

        Ok(())
    }

    /// loads with a custom resolver. `resolve` returns null for symbols it can't find.
    ///
    /// the context is reset first; a failed load leaves every flag and slot unset. a present
    /// extension with entry points that can not be resolved is not an error, those slots simply
    /// stay unset.
    ///
    /// # Safety
    ///
    /// every non-null pointer returned by `resolve` must be a function with the signature that
    /// the wgl registry specifies for the requested name, and must stay callable until the next
    /// load or [`Wgl::unload`].
    pub unsafe fn load_with<F>(&mut self, mut resolve: F, hdc: HDC) -> Result<(), LoadError>
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        self.reset();

        let mut lookup = |name: &CStr| {
            let ptr = NonNull::new(resolve(name).cast_mut());
            #[cfg(feature = "debug")]
            log::trace!("resolved {name:?}: {ptr:?}");
            ptr
        };

        let queries = ExtensionsStringQueries {
            arb: lookup(Command::GetExtensionsStringARB.name()),
            ext: lookup(Command::GetExtensionsStringEXT.name()),
        };
        if queries.arb.is_none() && queries.ext.is_none() {
            return Err(LoadError::NoExtensionsStringQuery);
        }

        let extensions = unsafe { queries.query(hdc) }.ok_or(LoadError::NoExtensionsString)?;
        log::debug!("extensions string: {extensions:?}");

        let mut supported = [false; Extension::COUNT];
        for ext in Extension::supported_in(extensions.to_bytes()) {
            supported[ext as usize] = true;
        }

        let mut commands = [None; Command::COUNT];
        for ext in Extension::ALL.iter().filter(|ext| supported[**ext as usize]) {
            log::debug!("found {ext}");
            for command in ext.commands() {
                let ptr = lookup(command.name());
                if ptr.is_none() {
                    log::warn!(
                        "{ext} is advertised, but {:?} could not be resolved",
                        command.name()
                    );
                }
                commands[*command as usize] = ptr;
            }
        }

        self.hdc = hdc;
        self.queries = queries;
        self.extensions = supported;
        self.commands = commands;

        Ok(())
    }

    /// releases the gl library opened by [`Wgl::load`]. flags and slots are kept; the entry
    /// points must not be called until the next load.
    ///
    /// NOTE: the extensions string queries are dropped, [`Wgl::extensions_string`] is `None`
    /// until the next load.
    pub fn unload(&mut self) {
        self.queries = ExtensionsStringQueries::default();
        if self.library.take().is_some() {
            log::debug!("released gl library");
        }
    }

    pub fn is_library_loaded(&self) -> bool {
        self.library.is_some()
    }

    /// device context that the last successful load queried extensions for.
    pub fn hdc(&self) -> HDC {
        self.hdc
    }

    pub fn has(&self, ext: Extension) -> bool {
        self.extensions[ext as usize]
    }

    /// same as [`Wgl::has`], by name. unknown names are never supported.
    pub fn has_named(&self, name: &str) -> bool {
        Extension::from_name(name).is_some_and(|ext| self.has(ext))
    }

    pub fn supported_extensions(&self) -> impl Iterator<Item = Extension> + '_ {
        Extension::ALL.iter().copied().filter(|ext| self.has(*ext))
    }

    pub fn get(&self, command: Command) -> Option<NonNull<c_void>> {
        self.commands[command as usize]
    }

    pub fn is_loaded(&self, command: Command) -> bool {
        self.get(command).is_some()
    }

    /// queries the extensions string again, for the device context of the last load. `None`
    /// after a failed load or [`Wgl::unload`].
    pub fn extensions_string(&self) -> Option<&CStr> {
        unsafe { self.queries.query(self.hdc) }
    }

    fn command_ptr(&self, command: Command) -> *mut c_void {
        match self.get(command) {
            Some(ptr) => ptr.as_ptr(),
            None => null_fn_ptr_panic(command),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::ffi::{CStr, CString, c_char, c_int, c_void};
    use std::ptr::null;

    use super::*;

    const FAKE_HDC: HDC = 0x1000 as HDC;

    thread_local! {
        static ARB_EXTENSIONS: Cell<Option<&'static CStr>> = const { Cell::new(None) };
        static EXT_EXTENSIONS: Cell<Option<&'static CStr>> = const { Cell::new(None) };
        static SWAP_INTERVAL: Cell<c_int> = const { Cell::new(0) };
    }

    unsafe extern "system" fn get_extensions_string_arb(_hdc: HDC) -> *const c_char {
        ARB_EXTENSIONS.get().map_or(null(), CStr::as_ptr)
    }

    unsafe extern "system" fn get_extensions_string_ext() -> *const c_char {
        EXT_EXTENSIONS.get().map_or(null(), CStr::as_ptr)
    }

    unsafe extern "system" fn swap_interval_ext(interval: c_int) -> BOOL {
        SWAP_INTERVAL.set(interval);
        TRUE
    }

    unsafe extern "system" fn get_swap_interval_ext() -> c_int {
        SWAP_INTERVAL.get()
    }

    unsafe extern "system" fn stub() {}

    fn fake_proc(name: &CStr) -> *const c_void {
        match name.to_bytes() {
            b"wglGetExtensionsStringARB" => get_extensions_string_arb as *const c_void,
            b"wglGetExtensionsStringEXT" => get_extensions_string_ext as *const c_void,
            b"wglSwapIntervalEXT" => swap_interval_ext as *const c_void,
            b"wglGetSwapIntervalEXT" => get_swap_interval_ext as *const c_void,
            _ => stub as *const c_void,
        }
    }

    fn set_extensions(arb: Option<&'static CStr>, ext: Option<&'static CStr>) {
        ARB_EXTENSIONS.set(arb);
        EXT_EXTENSIONS.set(ext);
    }

    /// pretends to be a driver: hands out a function for every name except the missing ones and
    /// remembers what was asked for.
    struct FakeDriver {
        missing: Vec<&'static CStr>,
        requested: Vec<CString>,
    }

    impl FakeDriver {
        fn new(arb: Option<&'static CStr>, ext: Option<&'static CStr>) -> Self {
            set_extensions(arb, ext);
            Self {
                missing: Vec::new(),
                requested: Vec::new(),
            }
        }

        fn without(mut self, name: &'static CStr) -> Self {
            self.missing.push(name);
            self
        }

        fn resolve(&mut self, name: &CStr) -> *const c_void {
            self.requested.push(name.to_owned());
            if self.missing.iter().any(|missing| *missing == name) {
                return null();
            }
            fake_proc(name)
        }

        fn was_requested(&self, command: Command) -> bool {
            self.requested
                .iter()
                .any(|name| name.as_c_str() == command.name())
        }
    }

    fn load(driver: &mut FakeDriver, hdc: HDC) -> Result<Wgl, LoadError> {
        let mut wgl = Wgl::new();
        unsafe { wgl.load_with(|name| driver.resolve(name), hdc) }?;
        Ok(wgl)
    }

    fn snapshot(wgl: &Wgl) -> (Vec<Extension>, Vec<Command>) {
        let supported = wgl.supported_extensions().collect();
        let loaded = Command::ALL
            .iter()
            .copied()
            .filter(|command| wgl.is_loaded(*command))
            .collect();
        (supported, loaded)
    }

    fn assert_empty(wgl: &Wgl) {
        assert_eq!(wgl.supported_extensions().count(), 0);
        assert!(Command::ALL.iter().all(|command| !wgl.is_loaded(*command)));
    }

    #[test]
    fn test_load() {
        let mut driver = FakeDriver::new(Some(c"WGL_ARB_multisample WGL_EXT_swap_control"), None);
        let wgl = load(&mut driver, FAKE_HDC).unwrap();

        assert!(wgl.has(Extension::ARB_multisample));
        assert!(wgl.has(Extension::EXT_swap_control));
        assert!(!wgl.has(Extension::ARB_pbuffer));
        assert_eq!(wgl.hdc(), FAKE_HDC);

        for command in Extension::EXT_swap_control.commands() {
            assert!(wgl.is_loaded(*command));
            assert!(driver.was_requested(*command));
        }
        for command in Extension::ARB_pbuffer.commands() {
            assert!(!wgl.is_loaded(*command));
            assert!(!driver.was_requested(*command));
        }

        // NOTE: bootstrap functions are not slots of their own; the string above does not
        // advertise the extensions they belong to.
        assert!(!wgl.is_loaded(Command::GetExtensionsStringARB));
        assert!(!wgl.is_loaded(Command::GetExtensionsStringEXT));
    }

    #[test]
    fn test_load_flags_match_tokens() {
        let mut driver = FakeDriver::new(
            Some(c"FOO_WGL_EXT_multisample WGL_ARB_pixel_format_float WGL_ARB_pbuffer"),
            None,
        );
        let wgl = load(&mut driver, FAKE_HDC).unwrap();

        assert!(!wgl.has(Extension::EXT_multisample));
        assert!(!wgl.has(Extension::ARB_pixel_format));
        assert!(wgl.has(Extension::ARB_pixel_format_float));
        assert!(wgl.has(Extension::ARB_pbuffer));
        assert!(wgl.has_named("WGL_ARB_pbuffer"));
        assert!(!wgl.has_named("FOO_WGL_EXT_multisample"));

        let supported: Vec<Extension> = wgl.supported_extensions().collect();
        assert_eq!(
            supported,
            [Extension::ARB_pbuffer, Extension::ARB_pixel_format_float]
        );
    }

    #[test]
    fn test_load_without_query_functions() {
        let mut driver = FakeDriver::new(Some(c"WGL_ARB_pbuffer"), Some(c"WGL_ARB_pbuffer"))
            .without(c"wglGetExtensionsStringARB")
            .without(c"wglGetExtensionsStringEXT");

        let mut wgl = Wgl::new();
        let result = unsafe { wgl.load_with(|name| driver.resolve(name), FAKE_HDC) };
        assert!(matches!(result, Err(LoadError::NoExtensionsStringQuery)));
        assert_empty(&wgl);
        assert_eq!(wgl.hdc(), INVALID_HDC);
    }

    #[test]
    fn test_load_without_extensions_string() {
        let mut driver = FakeDriver::new(None, None);

        let mut wgl = Wgl::new();
        let result = unsafe { wgl.load_with(|name| driver.resolve(name), FAKE_HDC) };
        assert!(matches!(result, Err(LoadError::NoExtensionsString)));
        assert_empty(&wgl);
    }

    #[test]
    fn test_load_prefers_arb_query() {
        let mut driver = FakeDriver::new(Some(c"WGL_ARB_pbuffer"), Some(c"WGL_EXT_pbuffer"));
        let wgl = load(&mut driver, FAKE_HDC).unwrap();
        assert!(wgl.has(Extension::ARB_pbuffer));
        assert!(!wgl.has(Extension::EXT_pbuffer));
        assert_eq!(wgl.extensions_string(), Some(c"WGL_ARB_pbuffer"));
    }

    #[test]
    fn test_load_falls_back_to_ext_query() {
        // no device context
        let mut driver = FakeDriver::new(Some(c"WGL_ARB_pbuffer"), Some(c"WGL_EXT_pbuffer"));
        let wgl = load(&mut driver, INVALID_HDC).unwrap();
        assert!(!wgl.has(Extension::ARB_pbuffer));
        assert!(wgl.has(Extension::EXT_pbuffer));

        // no arb query function
        let mut driver = FakeDriver::new(Some(c"WGL_ARB_pbuffer"), Some(c"WGL_EXT_pbuffer"))
            .without(c"wglGetExtensionsStringARB");
        let wgl = load(&mut driver, FAKE_HDC).unwrap();
        assert!(wgl.has(Extension::EXT_pbuffer));

        // arb query function returns nothing
        let mut driver = FakeDriver::new(None, Some(c"WGL_EXT_pbuffer"));
        let wgl = load(&mut driver, FAKE_HDC).unwrap();
        assert!(wgl.has(Extension::EXT_pbuffer));
    }

    #[test]
    fn test_failed_load_clears_previous_load() {
        let mut wgl = Wgl::new();

        let mut driver = FakeDriver::new(Some(c"WGL_EXT_swap_control"), None);
        unsafe { wgl.load_with(|name| driver.resolve(name), FAKE_HDC) }.unwrap();
        assert!(wgl.has(Extension::EXT_swap_control));

        let mut driver = FakeDriver::new(None, None);
        let result = unsafe { wgl.load_with(|name| driver.resolve(name), FAKE_HDC) };
        assert!(result.is_err());
        assert_empty(&wgl);
        assert_eq!(wgl.extensions_string(), None);
    }

    #[test]
    fn test_load_partially_resolvable_extension() {
        let mut driver = FakeDriver::new(Some(c"WGL_ARB_pixel_format"), None)
            .without(c"wglGetPixelFormatAttribfvARB");
        let wgl = load(&mut driver, FAKE_HDC).unwrap();

        assert!(wgl.has(Extension::ARB_pixel_format));
        assert!(wgl.is_loaded(Command::GetPixelFormatAttribivARB));
        assert!(!wgl.is_loaded(Command::GetPixelFormatAttribfvARB));
        assert!(wgl.is_loaded(Command::ChoosePixelFormatARB));
        assert!(driver.was_requested(Command::GetPixelFormatAttribfvARB));
    }

    #[test]
    fn test_unload_then_load() {
        let extensions = c"WGL_ARB_create_context WGL_ARB_extensions_string WGL_EXT_swap_control";

        let mut wgl = Wgl::new();
        let mut driver = FakeDriver::new(Some(extensions), None);
        unsafe { wgl.load_with(|name| driver.resolve(name), FAKE_HDC) }.unwrap();
        let first = snapshot(&wgl);

        assert_eq!(wgl.extensions_string(), Some(extensions));

        wgl.unload();
        // NOTE: unload keeps flags and slots, but not the extensions string queries.
        assert_eq!(snapshot(&wgl), first);
        assert_eq!(wgl.extensions_string(), None);

        let mut driver = FakeDriver::new(Some(extensions), None);
        unsafe { wgl.load_with(|name| driver.resolve(name), FAKE_HDC) }.unwrap();
        assert_eq!(snapshot(&wgl), first);

        let (supported, loaded) = first;
        assert_eq!(
            supported,
            [
                Extension::ARB_create_context,
                Extension::ARB_extensions_string,
                Extension::EXT_swap_control
            ]
        );
        assert_eq!(
            loaded,
            [
                Command::CreateContextAttribsARB,
                Command::GetExtensionsStringARB,
                Command::SwapIntervalEXT,
                Command::GetSwapIntervalEXT
            ]
        );
    }

    #[test]
    fn test_call_loaded_function() {
        let mut driver = FakeDriver::new(Some(c"WGL_EXT_swap_control"), None);
        let wgl = load(&mut driver, FAKE_HDC).unwrap();

        unsafe {
            assert_eq!(wgl.SwapIntervalEXT(2), TRUE);
            assert_eq!(wgl.GetSwapIntervalEXT(), 2);
        }
    }

    #[test]
    #[should_panic(expected = "function was not loaded")]
    fn test_call_unloaded_function() {
        let mut driver = FakeDriver::new(Some(c"WGL_ARB_multisample"), None);
        let wgl = load(&mut driver, FAKE_HDC).unwrap();
        unsafe { wgl.SwapIntervalEXT(1) };
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    unsafe extern "C" fn fake_get_proc_address(name: *const c_char) -> *const c_void {
        fake_proc(unsafe { CStr::from_ptr(name) })
    }

    // NOTE: libc stands in for the gl library; it does not export any wgl symbols.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    fn fake_library() -> Library {
        let dynlib = dynlib::DynLib::open(c"libc.so.6").unwrap();
        Library::with_get_proc_address(dynlib, fake_get_proc_address)
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn test_load_from_library_then_unload() {
        let extensions = c"WGL_EXT_extensions_string WGL_EXT_swap_control";
        set_extensions(None, Some(extensions));

        let mut wgl = Wgl::new();
        wgl.load_from(fake_library(), INVALID_HDC).unwrap();
        assert!(wgl.is_library_loaded());
        assert_eq!(wgl.extensions_string(), Some(extensions));
        let first = snapshot(&wgl);
        assert_eq!(
            first.0,
            [Extension::EXT_extensions_string, Extension::EXT_swap_control]
        );

        wgl.unload();
        assert!(!wgl.is_library_loaded());
        assert_eq!(wgl.extensions_string(), None);
        assert_eq!(snapshot(&wgl), first);

        wgl.load_from(fake_library(), INVALID_HDC).unwrap();
        assert!(wgl.is_library_loaded());
        assert_eq!(wgl.extensions_string(), Some(extensions));
        assert_eq!(snapshot(&wgl), first);
        unsafe {
            assert_eq!(wgl.SwapIntervalEXT(3), TRUE);
            assert_eq!(wgl.GetSwapIntervalEXT(), 3);
        }
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn test_load_from_releases_library_on_failure() {
        set_extensions(None, Some(c"WGL_EXT_swap_control"));
        let mut wgl = Wgl::new();
        wgl.load_from(fake_library(), INVALID_HDC).unwrap();

        let library = Library::open_from(&[c"libc.so.6"], None).unwrap();
        let result = wgl.load_from(library, INVALID_HDC);
        assert!(matches!(result, Err(LoadError::NoExtensionsStringQuery)));
        assert!(!wgl.is_library_loaded());
        assert_empty(&wgl);
        assert_eq!(wgl.extensions_string(), None);

        set_extensions(None, None);
        let result = wgl.load_from(fake_library(), INVALID_HDC);
        assert!(matches!(result, Err(LoadError::NoExtensionsString)));
        assert!(!wgl.is_library_loaded());
        assert_empty(&wgl);
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn test_could_not_load_library() {
        let result = Library::open_from(&[c"libdefinitely-missing.so"], None)
            .map_err(LoadError::CouldNotLoadLibrary);
        match result {
            Err(err @ LoadError::CouldNotLoadLibrary(dynlib::Error::CouldNotOpen { .. })) => {
                assert!(
                    err.to_string()
                        .starts_with("could not load gl library: could not open")
                );
            }
            Err(err) => panic!("unexpected error: {err}"),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_load_error_display() {
        assert_eq!(
            LoadError::NoExtensionsString.to_string(),
            "could not query extensions string"
        );
    }
}
