pub mod seva;
