//! Target emitters.
//!
//! Three instances of one contract: consume the shared mora sequence (or,
//! for the logographic target, the raw label) and produce an ordered
//! candidate set for one orthography.

pub mod featural;
pub mod logographic;
pub mod minimal;

pub use logographic::{IdentityConverter, VariantConverter};
