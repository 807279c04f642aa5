pub mod checklist_ref;
pub mod command_error;
pub mod display;
pub mod displayable_id;
pub mod exit_code;
pub mod time;
