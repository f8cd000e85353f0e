pub mod cursor;
pub mod record;
pub mod timestamp;
