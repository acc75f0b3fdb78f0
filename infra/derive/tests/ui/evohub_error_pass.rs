use evohub_derive::evohub_error;
use std::borrow::Cow;

#[evohub_error]
pub enum ParseError {
    #[error("Integer parse error{}: {source}", format_context(.context))]
    Int {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, ParseError> {
    Ok(raw.parse::<u32>().context("parsing cap")?)
}

fn main() {
    let _ = parse("5");
}
