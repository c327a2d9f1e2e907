use std::borrow::Cow;

/// A specialized [`AccessError`] enum of this crate.
#[ahub_derive::ahub_error]
pub enum AccessError {
    /// A route pattern is not an absolute, well-formed path.
    #[error("Invalid route pattern{}: {message}", format_context(.context))]
    InvalidPattern { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two routes match exactly the same set of paths.
    #[error("Duplicate route{}: {message}", format_context(.context))]
    DuplicateRoute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The route table contradicts the routes configuration.
    #[error("Access misconfigured{}: {message}", format_context(.context))]
    Misconfigured { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal access error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
