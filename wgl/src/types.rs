#![allow(non_camel_case_types)]
#![allow(clippy::upper_case_acronyms)]

use std::ffi::{c_float, c_int, c_uchar, c_uint, c_ushort, c_void};

// NOTE: windows headers are not available everywhere, these mirror the subset of windef.h /
// wingdi.h that the wgl extensions refer to.
// https://registry.khronos.org/OpenGL/api/GL/wglext.h

dynlib::opaque_struct!(HDC__);
dynlib::opaque_struct!(HGLRC__);
dynlib::opaque_struct!(HPBUFFERARB__);
dynlib::opaque_struct!(HPBUFFEREXT__);

pub type BOOL = c_int;
pub type UINT = c_uint;
pub type FLOAT = c_float;
pub type HANDLE = *mut c_void;
pub type HDC = *mut HDC__;
pub type HGLRC = *mut HGLRC__;
pub type HPBUFFERARB = *mut HPBUFFERARB__;
pub type HPBUFFEREXT = *mut HPBUFFEREXT__;

pub type GLboolean = c_uchar;
pub type GLushort = c_ushort;
pub type GLuint = c_uint;

pub const FALSE: BOOL = 0;
pub const TRUE: BOOL = 1;

/// `INVALID_HANDLE_VALUE` as a device context; means that no device context is available for
/// scoping the extensions string query.
pub const INVALID_HDC: HDC = usize::MAX as HDC;
