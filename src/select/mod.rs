//! Algorithm selection.
//!
//! - [`hybrid`] - the GoCrazy dispatcher, which picks a matcher and runs it
//! - [`policy`] - pre-analysis policies, which only name a matcher
//! - [`registry`] - explicit name-to-matcher mapping used to run a policy's choice

pub mod hybrid;
pub mod policy;
pub mod registry;

pub use hybrid::{Decision, DecisionReason, GoCrazy};
pub use policy::{AdaptivePolicy, ClassificationPolicy, DeferPolicy, ExamplePolicy, PolicyKind};
pub use registry::{Outcome, Registry};
