/// Outcome of resolving one file's custom field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// The field resolved to a non-empty value; the file gets renamed to it.
    Success { value: String },
    /// Resolution failed; the file keeps its name and goes to the failed
    /// bucket together with the reason.
    Failure { reason: String },
}
