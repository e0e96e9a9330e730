pub mod profile;
pub mod resume;
pub mod user;

pub use profile::{NewProfile, UserProfile};
pub use resume::{NewResume, Resume, ResumeData, ResumeUpdate};
pub use user::{UpsertUser, User};
