//! The `Execute` trait implemented by every board intent
//!
//! Intents are structs where the fields ARE the parameters. Each one runs
//! to completion against a `&mut BoardStore`; exclusive access is what
//! serializes mutations.

use crate::error::Result;
use crate::store::BoardStore;

/// An intent that can be executed against a board store
pub trait Execute {
    /// What a successful execution returns
    type Output;

    /// Canonical op string (e.g. "create task", "drag over")
    fn op(&self) -> &'static str;

    /// Run the intent, committing through the store
    fn execute(&self, store: &mut BoardStore) -> Result<Self::Output>;
}
