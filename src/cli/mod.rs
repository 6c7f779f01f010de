pub mod orchestration;

pub use orchestration::{run_finalize_workflow, FinalizeWorkflowArgs, WorkflowResult};
