use std::ffi::c_int;

// https://registry.khronos.org/OpenGL/api/GL/wglext.h

// WGL_ARB_buffer_region

pub const FRONT_COLOR_BUFFER_BIT_ARB: c_int = 0x00000001;
pub const BACK_COLOR_BUFFER_BIT_ARB: c_int = 0x00000002;
pub const DEPTH_BUFFER_BIT_ARB: c_int = 0x00000004;
pub const STENCIL_BUFFER_BIT_ARB: c_int = 0x00000008;

// WGL_ARB_context_flush_control

pub const CONTEXT_RELEASE_BEHAVIOR_ARB: c_int = 0x2097;
pub const CONTEXT_RELEASE_BEHAVIOR_NONE_ARB: c_int = 0;
pub const CONTEXT_RELEASE_BEHAVIOR_FLUSH_ARB: c_int = 0x2098;

// WGL_ARB_create_context

pub const CONTEXT_DEBUG_BIT_ARB: c_int = 0x00000001;
pub const CONTEXT_FORWARD_COMPATIBLE_BIT_ARB: c_int = 0x00000002;
pub const CONTEXT_MAJOR_VERSION_ARB: c_int = 0x2091;
pub const CONTEXT_MINOR_VERSION_ARB: c_int = 0x2092;
pub const CONTEXT_LAYER_PLANE_ARB: c_int = 0x2093;
pub const CONTEXT_FLAGS_ARB: c_int = 0x2094;
pub const ERROR_INVALID_VERSION_ARB: c_int = 0x2095;

// WGL_ARB_create_context_no_error

pub const CONTEXT_OPENGL_NO_ERROR_ARB: c_int = 0x31B3;

// WGL_ARB_create_context_profile

pub const CONTEXT_PROFILE_MASK_ARB: c_int = 0x9126;
pub const CONTEXT_CORE_PROFILE_BIT_ARB: c_int = 0x00000001;
pub const CONTEXT_COMPATIBILITY_PROFILE_BIT_ARB: c_int = 0x00000002;
pub const ERROR_INVALID_PROFILE_ARB: c_int = 0x2096;

// WGL_ARB_create_context_robustness

pub const CONTEXT_ROBUST_ACCESS_BIT_ARB: c_int = 0x00000004;
pub const LOSE_CONTEXT_ON_RESET_ARB: c_int = 0x8252;
pub const CONTEXT_RESET_NOTIFICATION_STRATEGY_ARB: c_int = 0x8256;
pub const NO_RESET_NOTIFICATION_ARB: c_int = 0x8261;

// WGL_ARB_framebuffer_sRGB

pub const FRAMEBUFFER_SRGB_CAPABLE_ARB: c_int = 0x20A9;

// WGL_ARB_make_current_read

pub const ERROR_INVALID_PIXEL_TYPE_ARB: c_int = 0x2043;
pub const ERROR_INCOMPATIBLE_DEVICE_CONTEXTS_ARB: c_int = 0x2054;

// WGL_ARB_multisample

pub const SAMPLE_BUFFERS_ARB: c_int = 0x2041;
pub const SAMPLES_ARB: c_int = 0x2042;

// WGL_ARB_pbuffer

pub const DRAW_TO_PBUFFER_ARB: c_int = 0x202D;
pub const MAX_PBUFFER_PIXELS_ARB: c_int = 0x202E;
pub const MAX_PBUFFER_WIDTH_ARB: c_int = 0x202F;
pub const MAX_PBUFFER_HEIGHT_ARB: c_int = 0x2030;
pub const PBUFFER_LARGEST_ARB: c_int = 0x2033;
pub const PBUFFER_WIDTH_ARB: c_int = 0x2034;
pub const PBUFFER_HEIGHT_ARB: c_int = 0x2035;
pub const PBUFFER_LOST_ARB: c_int = 0x2036;

// WGL_ARB_pixel_format

pub const NUMBER_PIXEL_FORMATS_ARB: c_int = 0x2000;
pub const DRAW_TO_WINDOW_ARB: c_int = 0x2001;
pub const DRAW_TO_BITMAP_ARB: c_int = 0x2002;
pub const ACCELERATION_ARB: c_int = 0x2003;
pub const NEED_PALETTE_ARB: c_int = 0x2004;
pub const NEED_SYSTEM_PALETTE_ARB: c_int = 0x2005;
pub const SWAP_LAYER_BUFFERS_ARB: c_int = 0x2006;
pub const SWAP_METHOD_ARB: c_int = 0x2007;
pub const NUMBER_OVERLAYS_ARB: c_int = 0x2008;
pub const NUMBER_UNDERLAYS_ARB: c_int = 0x2009;
pub const TRANSPARENT_ARB: c_int = 0x200A;
pub const TRANSPARENT_RED_VALUE_ARB: c_int = 0x2037;
pub const TRANSPARENT_GREEN_VALUE_ARB: c_int = 0x2038;
pub const TRANSPARENT_BLUE_VALUE_ARB: c_int = 0x2039;
pub const TRANSPARENT_ALPHA_VALUE_ARB: c_int = 0x203A;
pub const TRANSPARENT_INDEX_VALUE_ARB: c_int = 0x203B;
pub const SHARE_DEPTH_ARB: c_int = 0x200C;
pub const SHARE_STENCIL_ARB: c_int = 0x200D;
pub const SHARE_ACCUM_ARB: c_int = 0x200E;
pub const SUPPORT_GDI_ARB: c_int = 0x200F;
pub const SUPPORT_OPENGL_ARB: c_int = 0x2010;
pub const DOUBLE_BUFFER_ARB: c_int = 0x2011;
pub const STEREO_ARB: c_int = 0x2012;
pub const PIXEL_TYPE_ARB: c_int = 0x2013;
pub const COLOR_BITS_ARB: c_int = 0x2014;
pub const RED_BITS_ARB: c_int = 0x2015;
pub const RED_SHIFT_ARB: c_int = 0x2016;
pub const GREEN_BITS_ARB: c_int = 0x2017;
pub const GREEN_SHIFT_ARB: c_int = 0x2018;
pub const BLUE_BITS_ARB: c_int = 0x2019;
pub const BLUE_SHIFT_ARB: c_int = 0x201A;
pub const ALPHA_BITS_ARB: c_int = 0x201B;
pub const ALPHA_SHIFT_ARB: c_int = 0x201C;
pub const ACCUM_BITS_ARB: c_int = 0x201D;
pub const ACCUM_RED_BITS_ARB: c_int = 0x201E;
pub const ACCUM_GREEN_BITS_ARB: c_int = 0x201F;
pub const ACCUM_BLUE_BITS_ARB: c_int = 0x2020;
pub const ACCUM_ALPHA_BITS_ARB: c_int = 0x2021;
pub const DEPTH_BITS_ARB: c_int = 0x2022;
pub const STENCIL_BITS_ARB: c_int = 0x2023;
pub const AUX_BUFFERS_ARB: c_int = 0x2024;
pub const NO_ACCELERATION_ARB: c_int = 0x2025;
pub const GENERIC_ACCELERATION_ARB: c_int = 0x2026;
pub const FULL_ACCELERATION_ARB: c_int = 0x2027;
pub const SWAP_EXCHANGE_ARB: c_int = 0x2028;
pub const SWAP_COPY_ARB: c_int = 0x2029;
pub const SWAP_UNDEFINED_ARB: c_int = 0x202A;
pub const TYPE_RGBA_ARB: c_int = 0x202B;
pub const TYPE_COLORINDEX_ARB: c_int = 0x202C;

// WGL_ARB_pixel_format_float

pub const TYPE_RGBA_FLOAT_ARB: c_int = 0x21A0;

// WGL_ARB_render_texture

pub const BIND_TO_TEXTURE_RGB_ARB: c_int = 0x2070;
pub const BIND_TO_TEXTURE_RGBA_ARB: c_int = 0x2071;
pub const TEXTURE_FORMAT_ARB: c_int = 0x2072;
pub const TEXTURE_TARGET_ARB: c_int = 0x2073;
pub const MIPMAP_TEXTURE_ARB: c_int = 0x2074;
pub const TEXTURE_RGB_ARB: c_int = 0x2075;
pub const TEXTURE_RGBA_ARB: c_int = 0x2076;
pub const NO_TEXTURE_ARB: c_int = 0x2077;
pub const TEXTURE_CUBE_MAP_ARB: c_int = 0x2078;
pub const TEXTURE_1D_ARB: c_int = 0x2079;
pub const TEXTURE_2D_ARB: c_int = 0x207A;
pub const MIPMAP_LEVEL_ARB: c_int = 0x207B;
pub const CUBE_MAP_FACE_ARB: c_int = 0x207C;
pub const TEXTURE_CUBE_MAP_POSITIVE_X_ARB: c_int = 0x207D;
pub const TEXTURE_CUBE_MAP_NEGATIVE_X_ARB: c_int = 0x207E;
pub const TEXTURE_CUBE_MAP_POSITIVE_Y_ARB: c_int = 0x207F;
pub const TEXTURE_CUBE_MAP_NEGATIVE_Y_ARB: c_int = 0x2080;
pub const TEXTURE_CUBE_MAP_POSITIVE_Z_ARB: c_int = 0x2081;
pub const TEXTURE_CUBE_MAP_NEGATIVE_Z_ARB: c_int = 0x2082;
pub const FRONT_LEFT_ARB: c_int = 0x2083;
pub const FRONT_RIGHT_ARB: c_int = 0x2084;
pub const BACK_LEFT_ARB: c_int = 0x2085;
pub const BACK_RIGHT_ARB: c_int = 0x2086;
pub const AUX0_ARB: c_int = 0x2087;
pub const AUX1_ARB: c_int = 0x2088;
pub const AUX2_ARB: c_int = 0x2089;
pub const AUX3_ARB: c_int = 0x208A;
pub const AUX4_ARB: c_int = 0x208B;
pub const AUX5_ARB: c_int = 0x208C;
pub const AUX6_ARB: c_int = 0x208D;
pub const AUX7_ARB: c_int = 0x208E;
pub const AUX8_ARB: c_int = 0x208F;
pub const AUX9_ARB: c_int = 0x2090;

// WGL_ARB_robustness_application_isolation, WGL_ARB_robustness_share_group_isolation

pub const CONTEXT_RESET_ISOLATION_BIT_ARB: c_int = 0x00000008;

// WGL_EXT_colorspace

pub const COLORSPACE_EXT: c_int = 0x309D;
pub const COLORSPACE_SRGB_EXT: c_int = 0x3089;
pub const COLORSPACE_LINEAR_EXT: c_int = 0x308A;

// WGL_EXT_create_context_es2_profile, WGL_EXT_create_context_es_profile

pub const CONTEXT_ES2_PROFILE_BIT_EXT: c_int = 0x00000004;
pub const CONTEXT_ES_PROFILE_BIT_EXT: c_int = 0x00000004;

// WGL_EXT_depth_float

pub const DEPTH_FLOAT_EXT: c_int = 0x2040;

// WGL_EXT_framebuffer_sRGB

pub const FRAMEBUFFER_SRGB_CAPABLE_EXT: c_int = 0x20A9;

// WGL_EXT_make_current_read

pub const ERROR_INVALID_PIXEL_TYPE_EXT: c_int = 0x2043;

// WGL_EXT_multisample

pub const SAMPLE_BUFFERS_EXT: c_int = 0x2041;
pub const SAMPLES_EXT: c_int = 0x2042;

// WGL_EXT_pbuffer

pub const DRAW_TO_PBUFFER_EXT: c_int = 0x202D;
pub const MAX_PBUFFER_PIXELS_EXT: c_int = 0x202E;
pub const MAX_PBUFFER_WIDTH_EXT: c_int = 0x202F;
pub const MAX_PBUFFER_HEIGHT_EXT: c_int = 0x2030;
pub const OPTIMAL_PBUFFER_WIDTH_EXT: c_int = 0x2031;
pub const OPTIMAL_PBUFFER_HEIGHT_EXT: c_int = 0x2032;
pub const PBUFFER_LARGEST_EXT: c_int = 0x2033;
pub const PBUFFER_WIDTH_EXT: c_int = 0x2034;
pub const PBUFFER_HEIGHT_EXT: c_int = 0x2035;

// WGL_EXT_pixel_format

pub const NUMBER_PIXEL_FORMATS_EXT: c_int = 0x2000;
pub const DRAW_TO_WINDOW_EXT: c_int = 0x2001;
pub const DRAW_TO_BITMAP_EXT: c_int = 0x2002;
pub const ACCELERATION_EXT: c_int = 0x2003;
pub const NEED_PALETTE_EXT: c_int = 0x2004;
pub const NEED_SYSTEM_PALETTE_EXT: c_int = 0x2005;
pub const SWAP_LAYER_BUFFERS_EXT: c_int = 0x2006;
pub const SWAP_METHOD_EXT: c_int = 0x2007;
pub const NUMBER_OVERLAYS_EXT: c_int = 0x2008;
pub const NUMBER_UNDERLAYS_EXT: c_int = 0x2009;
pub const TRANSPARENT_EXT: c_int = 0x200A;
pub const TRANSPARENT_VALUE_EXT: c_int = 0x200B;
pub const SHARE_DEPTH_EXT: c_int = 0x200C;
pub const SHARE_STENCIL_EXT: c_int = 0x200D;
pub const SHARE_ACCUM_EXT: c_int = 0x200E;
pub const SUPPORT_GDI_EXT: c_int = 0x200F;
pub const SUPPORT_OPENGL_EXT: c_int = 0x2010;
pub const DOUBLE_BUFFER_EXT: c_int = 0x2011;
pub const STEREO_EXT: c_int = 0x2012;
pub const PIXEL_TYPE_EXT: c_int = 0x2013;
pub const COLOR_BITS_EXT: c_int = 0x2014;
pub const RED_BITS_EXT: c_int = 0x2015;
pub const RED_SHIFT_EXT: c_int = 0x2016;
pub const GREEN_BITS_EXT: c_int = 0x2017;
pub const GREEN_SHIFT_EXT: c_int = 0x2018;
pub const BLUE_BITS_EXT: c_int = 0x2019;
pub const BLUE_SHIFT_EXT: c_int = 0x201A;
pub const ALPHA_BITS_EXT: c_int = 0x201B;
pub const ALPHA_SHIFT_EXT: c_int = 0x201C;
pub const ACCUM_BITS_EXT: c_int = 0x201D;
pub const ACCUM_RED_BITS_EXT: c_int = 0x201E;
pub const ACCUM_GREEN_BITS_EXT: c_int = 0x201F;
pub const ACCUM_BLUE_BITS_EXT: c_int = 0x2020;
pub const ACCUM_ALPHA_BITS_EXT: c_int = 0x2021;
pub const DEPTH_BITS_EXT: c_int = 0x2022;
pub const STENCIL_BITS_EXT: c_int = 0x2023;
pub const AUX_BUFFERS_EXT: c_int = 0x2024;
pub const NO_ACCELERATION_EXT: c_int = 0x2025;
pub const GENERIC_ACCELERATION_EXT: c_int = 0x2026;
pub const FULL_ACCELERATION_EXT: c_int = 0x2027;
pub const SWAP_EXCHANGE_EXT: c_int = 0x2028;
pub const SWAP_COPY_EXT: c_int = 0x2029;
pub const SWAP_UNDEFINED_EXT: c_int = 0x202A;
pub const TYPE_RGBA_EXT: c_int = 0x202B;
pub const TYPE_COLORINDEX_EXT: c_int = 0x202C;

// WGL_EXT_pixel_format_packed_float

pub const TYPE_RGBA_UNSIGNED_FLOAT_EXT: c_int = 0x20A8;
