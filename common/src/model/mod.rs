pub mod search;
pub mod seva;
