use std::borrow::Cow;

/// Errors raised around the resolvers: startup audits and snapshot rendering.
/// Resolution itself is total and never fails.
#[evohub_derive::evohub_error]
pub enum EntitlementError {
    /// An entitlement table breaks tier ordering.
    #[error("Entitlement table invariant violated{}: {message}", format_context(.context))]
    Table { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Serde serialization error with optional context.
    #[error("Snapshot serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_failures_carry_context() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = result.context("rendering voice table").unwrap_err();

        assert!(matches!(err, EntitlementError::Serialize { context: Some(_), .. }));
        assert!(err.to_string().starts_with("Snapshot serialization error (rendering voice table)"));
    }
}
