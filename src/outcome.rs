/// Terminal report of one run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SortOutcome {
    /// The destination was rewritten: header first, then `valid` sorted rows, then `invalid`
    /// rows in their original order.
    Rewritten { valid: usize, invalid: usize },
    /// The source was empty, so the destination was left untouched. This is a normal outcome,
    /// not an error.
    NothingToWrite,
}
