mod job;
mod module;
mod question;
mod role;
mod user;

pub use job::{Application, ApplicationStatus, Job, JobType, PostingStatus, SalaryRange};
pub use module::{Module, ModuleStatus};
pub use question::{Assessment, MIN_OPTIONS, Question};
pub use role::Role;
pub use user::{DemoAccount, Profile, User};
