use std::ffi::{CStr, c_char, c_int, c_void};
use std::mem;

use crate::Wgl;
use crate::types::*;

macro_rules! commands {
    ($(
        $name:ident = $symbol:literal => fn($($param:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Command {
            $($name,)*
        }

        impl Command {
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];
            pub const COUNT: usize = Self::ALL.len();

            /// name of the exported symbol.
            pub const fn name(self) -> &'static CStr {
                match self {
                    $(Self::$name => $symbol,)*
                }
            }
        }

        #[allow(non_snake_case)]
        #[allow(clippy::too_many_arguments)]
        impl Wgl {
            $(
                #[inline]
                pub unsafe fn $name(&self, $($param: $ty),*) $(-> $ret)? {
                    type Dst = unsafe extern "system" fn($($ty),*) $(-> $ret)?;
                    let ptr = self.command_ptr(Command::$name);
                    unsafe { mem::transmute::<*mut c_void, Dst>(ptr)($($param),*) }
                }
            )*
        }
    };
}

// https://registry.khronos.org/OpenGL/api/GL/wglext.h

commands! {
    // WGL_ARB_buffer_region
    CreateBufferRegionARB = c"wglCreateBufferRegionARB" =>
        fn(hdc: HDC, layer_plane: c_int, r#type: UINT) -> HANDLE;
    DeleteBufferRegionARB = c"wglDeleteBufferRegionARB" =>
        fn(region: HANDLE);
    SaveBufferRegionARB = c"wglSaveBufferRegionARB" =>
        fn(region: HANDLE, x: c_int, y: c_int, width: c_int, height: c_int) -> BOOL;
    RestoreBufferRegionARB = c"wglRestoreBufferRegionARB" =>
        fn(
            region: HANDLE,
            x: c_int,
            y: c_int,
            width: c_int,
            height: c_int,
            x_src: c_int,
            y_src: c_int,
        ) -> BOOL;

    // WGL_ARB_create_context
    CreateContextAttribsARB = c"wglCreateContextAttribsARB" =>
        fn(hdc: HDC, share_context: HGLRC, attrib_list: *const c_int) -> HGLRC;

    // WGL_ARB_extensions_string
    GetExtensionsStringARB = c"wglGetExtensionsStringARB" =>
        fn(hdc: HDC) -> *const c_char;

    // WGL_ARB_make_current_read
    MakeContextCurrentARB = c"wglMakeContextCurrentARB" =>
        fn(draw_dc: HDC, read_dc: HDC, hglrc: HGLRC) -> BOOL;
    GetCurrentReadDCARB = c"wglGetCurrentReadDCARB" =>
        fn() -> HDC;

    // WGL_ARB_pbuffer
    CreatePbufferARB = c"wglCreatePbufferARB" =>
        fn(
            hdc: HDC,
            pixel_format: c_int,
            width: c_int,
            height: c_int,
            attrib_list: *const c_int,
        ) -> HPBUFFERARB;
    GetPbufferDCARB = c"wglGetPbufferDCARB" =>
        fn(pbuffer: HPBUFFERARB) -> HDC;
    ReleasePbufferDCARB = c"wglReleasePbufferDCARB" =>
        fn(pbuffer: HPBUFFERARB, hdc: HDC) -> c_int;
    DestroyPbufferARB = c"wglDestroyPbufferARB" =>
        fn(pbuffer: HPBUFFERARB) -> BOOL;
    QueryPbufferARB = c"wglQueryPbufferARB" =>
        fn(pbuffer: HPBUFFERARB, attribute: c_int, value: *mut c_int) -> BOOL;

    // WGL_ARB_pixel_format
    GetPixelFormatAttribivARB = c"wglGetPixelFormatAttribivARB" =>
        fn(
            hdc: HDC,
            pixel_format: c_int,
            layer_plane: c_int,
            num_attributes: UINT,
            attributes: *const c_int,
            values: *mut c_int,
        ) -> BOOL;
    GetPixelFormatAttribfvARB = c"wglGetPixelFormatAttribfvARB" =>
        fn(
            hdc: HDC,
            pixel_format: c_int,
            layer_plane: c_int,
            num_attributes: UINT,
            attributes: *const c_int,
            values: *mut FLOAT,
        ) -> BOOL;
    ChoosePixelFormatARB = c"wglChoosePixelFormatARB" =>
        fn(
            hdc: HDC,
            attrib_i_list: *const c_int,
            attrib_f_list: *const FLOAT,
            max_formats: UINT,
            formats: *mut c_int,
            num_formats: *mut UINT,
        ) -> BOOL;

    // WGL_ARB_render_texture
    BindTexImageARB = c"wglBindTexImageARB" =>
        fn(pbuffer: HPBUFFERARB, buffer: c_int) -> BOOL;
    ReleaseTexImageARB = c"wglReleaseTexImageARB" =>
        fn(pbuffer: HPBUFFERARB, buffer: c_int) -> BOOL;
    SetPbufferAttribARB = c"wglSetPbufferAttribARB" =>
        fn(pbuffer: HPBUFFERARB, attrib_list: *const c_int) -> BOOL;

    // WGL_EXT_display_color_table
    CreateDisplayColorTableEXT = c"wglCreateDisplayColorTableEXT" =>
        fn(id: GLushort) -> GLboolean;
    LoadDisplayColorTableEXT = c"wglLoadDisplayColorTableEXT" =>
        fn(table: *const GLushort, length: GLuint) -> GLboolean;
    BindDisplayColorTableEXT = c"wglBindDisplayColorTableEXT" =>
        fn(id: GLushort) -> GLboolean;
    DestroyDisplayColorTableEXT = c"wglDestroyDisplayColorTableEXT" =>
        fn(id: GLushort);

    // WGL_EXT_extensions_string
    GetExtensionsStringEXT = c"wglGetExtensionsStringEXT" =>
        fn() -> *const c_char;

    // WGL_EXT_make_current_read
    MakeContextCurrentEXT = c"wglMakeContextCurrentEXT" =>
        fn(draw_dc: HDC, read_dc: HDC, hglrc: HGLRC) -> BOOL;
    GetCurrentReadDCEXT = c"wglGetCurrentReadDCEXT" =>
        fn() -> HDC;

    // WGL_EXT_pbuffer
    CreatePbufferEXT = c"wglCreatePbufferEXT" =>
        fn(
            hdc: HDC,
            pixel_format: c_int,
            width: c_int,
            height: c_int,
            attrib_list: *const c_int,
        ) -> HPBUFFEREXT;
    GetPbufferDCEXT = c"wglGetPbufferDCEXT" =>
        fn(pbuffer: HPBUFFEREXT) -> HDC;
    ReleasePbufferDCEXT = c"wglReleasePbufferDCEXT" =>
        fn(pbuffer: HPBUFFEREXT, hdc: HDC) -> c_int;
    DestroyPbufferEXT = c"wglDestroyPbufferEXT" =>
        fn(pbuffer: HPBUFFEREXT) -> BOOL;
    QueryPbufferEXT = c"wglQueryPbufferEXT" =>
        fn(pbuffer: HPBUFFEREXT, attribute: c_int, value: *mut c_int) -> BOOL;

    // WGL_EXT_pixel_format
    // NOTE: unlike the ARB variant the attribute lists are not const in the registry.
    GetPixelFormatAttribivEXT = c"wglGetPixelFormatAttribivEXT" =>
        fn(
            hdc: HDC,
            pixel_format: c_int,
            layer_plane: c_int,
            num_attributes: UINT,
            attributes: *mut c_int,
            values: *mut c_int,
        ) -> BOOL;
    GetPixelFormatAttribfvEXT = c"wglGetPixelFormatAttribfvEXT" =>
        fn(
            hdc: HDC,
            pixel_format: c_int,
            layer_plane: c_int,
            num_attributes: UINT,
            attributes: *mut c_int,
            values: *mut FLOAT,
        ) -> BOOL;
    ChoosePixelFormatEXT = c"wglChoosePixelFormatEXT" =>
        fn(
            hdc: HDC,
            attrib_i_list: *const c_int,
            attrib_f_list: *const FLOAT,
            max_formats: UINT,
            formats: *mut c_int,
            num_formats: *mut UINT,
        ) -> BOOL;

    // WGL_EXT_swap_control
    SwapIntervalEXT = c"wglSwapIntervalEXT" =>
        fn(interval: c_int) -> BOOL;
    GetSwapIntervalEXT = c"wglGetSwapIntervalEXT" =>
        fn() -> c_int;
}
