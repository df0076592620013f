pub mod actor;
pub mod clock;
pub mod draft;
pub mod limit;
pub mod parse;
