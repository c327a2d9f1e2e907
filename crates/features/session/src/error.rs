use std::borrow::Cow;

#[ahub_derive::ahub_error]
pub enum SessionError {
    /// The bootstrap check did not answer in time; the session was resolved as signed out.
    #[error("Session bootstrap timed out{}: {message}", format_context(.context))]
    BootstrapTimeout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Credentials rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The authentication backend failed (network, malformed answer, ...).
    #[error("Session provider error{}: {message}", format_context(.context))]
    Provider { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal session error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
