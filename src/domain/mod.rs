pub mod error;
pub mod order;
pub mod record;
pub mod schema;
