//! Entity structs for the QA tracking store.
//!
//! Each entity maps to a table in the libSQL database. A scenario owns many
//! steps, defects, and proofs. Defects and proofs reference a step by its
//! per-scenario number, never by the step row's identity.

mod defect;
mod proof;
mod scenario;
mod step;

pub use defect::{Defect, MIN_TITLE_LEN};
pub use proof::Proof;
pub use scenario::{MIN_NAME_LEN, NewScenario, Scenario};
pub use step::Step;
