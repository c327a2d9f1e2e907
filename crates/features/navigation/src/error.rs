use std::borrow::Cow;

/// A specialized [`NavigationError`] enum of this crate.
#[ahub_derive::ahub_error]
pub enum NavigationError {
    /// The key names no collapsible group of the active menu.
    #[error("Unknown submenu{}: {message}", format_context(.context))]
    UnknownSubmenu { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The language code is not offered by the switcher.
    #[error("Unsupported language{}: {message}", format_context(.context))]
    UnsupportedLanguage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal navigation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
