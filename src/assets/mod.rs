pub(crate) mod builtin_font;
pub(crate) mod decode;
pub(crate) mod fonts;
pub(crate) mod palette;
