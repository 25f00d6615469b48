pub mod athlete;
pub mod cycle;
pub mod plan;
pub mod session;

pub use athlete::{TrainingLevel, UserProfile};
pub use cycle::{DailyReadinessInputs, MacrocycleContext, MicrocycleDayContext, Template, TrainingPhase};
pub use plan::{DailyPlan, PlanMeta, PlanRequest, Readiness};
pub use session::{Segment, Session};
