pub mod checklist;
pub mod motivation;
pub mod user;
