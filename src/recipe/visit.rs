use crate::error::CraftError;

/// The chain of artifacts currently being expanded by a recursive walk.
///
/// Entering an artifact that is already on the chain means the catalog has a cycle.
#[derive(Debug, Default)]
pub(crate) struct VisitStack {
    chain: Vec<String>,
}

impl VisitStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn enter(&mut self, artifact: &str) -> Result<(), CraftError> {
        if self.chain.iter().any(|a| a == artifact) {
            let mut path = self.chain.clone();
            path.push(artifact.to_string());
            return Err(CraftError::CycleDetected {
                artifact: artifact.to_string(),
                path,
            });
        }
        self.chain.push(artifact.to_string());
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.chain.pop();
    }
}
