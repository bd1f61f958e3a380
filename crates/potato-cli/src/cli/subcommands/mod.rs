mod defect;
mod proof;
mod scenario;
mod step;

pub use defect::DefectCommands;
pub use proof::ProofCommands;
pub use scenario::ScenarioCommands;
pub use step::StepCommands;
