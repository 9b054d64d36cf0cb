/// Outcome of a batch of filesystem mutations. Failed items never stop the batch;
/// each one leaves a human-readable line in `errors`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub errors: Vec<String>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn fatal(message: String) -> Self {
        BatchReport {
            succeeded: 0,
            errors: vec![message],
        }
    }
}
