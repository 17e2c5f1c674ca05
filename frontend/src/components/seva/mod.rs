pub mod form;
pub mod table;
pub mod trash;
