use ahub_derive::ahub_error;
use std::borrow::Cow;

#[ahub_error]
pub enum RouteTableError {
    #[error("Pattern parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u8, RouteTableError> {
    let value: u8 = raw.parse().context("segment index")?;
    if value == 0 {
        return Err("index must be positive".into());
    }
    Ok(value)
}

fn main() {
    assert!(parse("3").is_ok());
    assert!(parse("x").is_err());
    assert!(matches!(parse("0"), Err(RouteTableError::Internal { .. })));
}
