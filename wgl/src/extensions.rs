use std::fmt;

use crate::Command;

/// checks whether `name` appears in a space-separated extensions string as a whole token.
///
/// a plain substring search is not enough: `WGL_EXT_multisample` must not be found in
/// `FOO_WGL_EXT_multisample`, neither should `WGL_ARB_pixel_format` be found in
/// `WGL_ARB_pixel_format_float`.
pub fn has_extension(extensions: &[u8], name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    extensions
        .split(u8::is_ascii_whitespace)
        .any(|token| token == name.as_bytes())
}

macro_rules! extensions {
    ($($name:ident = $string:literal => [$($command:ident),* $(,)?],)*) => {
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Extension {
            $($name,)*
        }

        impl Extension {
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];
            pub const COUNT: usize = Self::ALL.len();

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => $string,)*
                }
            }

            /// entry points that become available when the extension is supported.
            pub const fn commands(self) -> &'static [Command] {
                match self {
                    $(Self::$name => &[$(Command::$command),*],)*
                }
            }
        }
    };
}

extensions! {
    ARB_buffer_region = "WGL_ARB_buffer_region" => [
        CreateBufferRegionARB,
        DeleteBufferRegionARB,
        SaveBufferRegionARB,
        RestoreBufferRegionARB,
    ],
    ARB_context_flush_control = "WGL_ARB_context_flush_control" => [],
    ARB_create_context = "WGL_ARB_create_context" => [CreateContextAttribsARB],
    ARB_create_context_no_error = "WGL_ARB_create_context_no_error" => [],
    ARB_create_context_profile = "WGL_ARB_create_context_profile" => [],
    ARB_create_context_robustness = "WGL_ARB_create_context_robustness" => [],
    ARB_extensions_string = "WGL_ARB_extensions_string" => [GetExtensionsStringARB],
    ARB_framebuffer_sRGB = "WGL_ARB_framebuffer_sRGB" => [],
    ARB_make_current_read = "WGL_ARB_make_current_read" => [
        MakeContextCurrentARB,
        GetCurrentReadDCARB,
    ],
    ARB_multisample = "WGL_ARB_multisample" => [],
    ARB_pbuffer = "WGL_ARB_pbuffer" => [
        CreatePbufferARB,
        GetPbufferDCARB,
        ReleasePbufferDCARB,
        DestroyPbufferARB,
        QueryPbufferARB,
    ],
    ARB_pixel_format = "WGL_ARB_pixel_format" => [
        GetPixelFormatAttribivARB,
        GetPixelFormatAttribfvARB,
        ChoosePixelFormatARB,
    ],
    ARB_pixel_format_float = "WGL_ARB_pixel_format_float" => [],
    ARB_render_texture = "WGL_ARB_render_texture" => [
        BindTexImageARB,
        ReleaseTexImageARB,
        SetPbufferAttribARB,
    ],
    ARB_robustness_application_isolation = "WGL_ARB_robustness_application_isolation" => [],
    ARB_robustness_share_group_isolation = "WGL_ARB_robustness_share_group_isolation" => [],
    EXT_colorspace = "WGL_EXT_colorspace" => [],
    EXT_create_context_es2_profile = "WGL_EXT_create_context_es2_profile" => [],
    EXT_create_context_es_profile = "WGL_EXT_create_context_es_profile" => [],
    EXT_depth_float = "WGL_EXT_depth_float" => [],
    EXT_display_color_table = "WGL_EXT_display_color_table" => [
        CreateDisplayColorTableEXT,
        LoadDisplayColorTableEXT,
        BindDisplayColorTableEXT,
        DestroyDisplayColorTableEXT,
    ],
    EXT_extensions_string = "WGL_EXT_extensions_string" => [GetExtensionsStringEXT],
    EXT_framebuffer_sRGB = "WGL_EXT_framebuffer_sRGB" => [],
    EXT_make_current_read = "WGL_EXT_make_current_read" => [
        MakeContextCurrentEXT,
        GetCurrentReadDCEXT,
    ],
    EXT_multisample = "WGL_EXT_multisample" => [],
    EXT_pbuffer = "WGL_EXT_pbuffer" => [
        CreatePbufferEXT,
        GetPbufferDCEXT,
        ReleasePbufferDCEXT,
        DestroyPbufferEXT,
        QueryPbufferEXT,
    ],
    EXT_pixel_format = "WGL_EXT_pixel_format" => [
        GetPixelFormatAttribivEXT,
        GetPixelFormatAttribfvEXT,
        ChoosePixelFormatEXT,
    ],
    EXT_pixel_format_packed_float = "WGL_EXT_pixel_format_packed_float" => [],
    EXT_swap_control = "WGL_EXT_swap_control" => [SwapIntervalEXT, GetSwapIntervalEXT],
    EXT_swap_control_tear = "WGL_EXT_swap_control_tear" => [],
}

impl Extension {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ext| ext.name() == name)
    }

    /// iterates over known extensions that are present in the given extensions string.
    pub fn supported_in(extensions: &[u8]) -> impl Iterator<Item = Self> + '_ {
        Self::ALL
            .iter()
            .copied()
            .filter(move |ext| has_extension(extensions, ext.name()))
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn test_has_extension_position() {
    let extensions = b"WGL_ARB_multisample WGL_EXT_swap_control WGL_ARB_pbuffer";
    assert!(has_extension(extensions, "WGL_ARB_multisample"));
    assert!(has_extension(extensions, "WGL_EXT_swap_control"));
    assert!(has_extension(extensions, "WGL_ARB_pbuffer"));
    assert!(has_extension(b"WGL_ARB_pbuffer", "WGL_ARB_pbuffer"));
}

#[test]
fn test_has_extension_rejects_partial_tokens() {
    assert!(!has_extension(b"FOO_EXT_multisample", "EXT_multisample"));
    assert!(!has_extension(b"EXT_multisample_FOO", "EXT_multisample"));
    assert!(!has_extension(
        b"WGL_ARB_pixel_format_float WGL_EXT_swap_control_tear",
        "WGL_ARB_pixel_format"
    ));
    assert!(!has_extension(
        b"WGL_ARB_pixel_format_float WGL_EXT_swap_control_tear",
        "WGL_EXT_swap_control"
    ));
    assert!(has_extension(
        b"FOO_EXT_multisample EXT_multisample",
        "EXT_multisample"
    ));
}

#[test]
fn test_has_extension_whitespace() {
    // NOTE: some drivers pad the string with a trailing space.
    assert!(has_extension(b"WGL_ARB_pbuffer ", "WGL_ARB_pbuffer"));
    assert!(has_extension(b"  WGL_ARB_pbuffer", "WGL_ARB_pbuffer"));
    assert!(has_extension(b"WGL_ARB_multisample\tWGL_ARB_pbuffer\n", "WGL_ARB_pbuffer"));
    assert!(!has_extension(b"", "WGL_ARB_pbuffer"));
    assert!(!has_extension(b"WGL_ARB_pbuffer  WGL_ARB_multisample", ""));
}

#[test]
fn test_tables() {
    assert_eq!(Extension::COUNT, 30);
    assert_eq!(Command::COUNT, 37);

    for ext in Extension::ALL {
        assert!(ext.name().starts_with("WGL_"));
        assert_eq!(Extension::from_name(ext.name()), Some(*ext));
    }
    assert_eq!(Extension::from_name("WGL_NV_DX_interop"), None);

    // every command is owned by exactly one extension.
    for command in Command::ALL {
        let owners = Extension::ALL
            .iter()
            .filter(|ext| ext.commands().contains(command))
            .count();
        assert_eq!(owners, 1, "{command:?}");
        assert!(command.name().to_bytes().starts_with(b"wgl"));
    }
}

#[test]
fn test_supported_in() {
    let supported: Vec<Extension> =
        Extension::supported_in(b"WGL_EXT_swap_control WGL_FOO_bar WGL_ARB_multisample").collect();
    assert_eq!(
        supported,
        [Extension::ARB_multisample, Extension::EXT_swap_control]
    );
}
