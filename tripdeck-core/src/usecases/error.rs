use crate::repositories;
use thiserror::Error;

// The taxonomy is deliberately narrow: stale references and duplicate
// insertions are reported as outcomes, not errors, so only the storage
// layer can actually fail here.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
