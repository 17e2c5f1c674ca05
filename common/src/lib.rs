pub mod dates;
pub mod model;
pub mod order;
pub mod table;
