pub mod command;
pub mod step;

pub use command::{CommandOutput, CommandRunner, SystemRunner};
pub use step::{Step, StepStatus};
