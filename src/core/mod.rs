pub mod datekey;
pub mod daterange;
pub mod dirty;
pub mod grid;
pub mod load;
pub mod options;
pub mod save;
pub mod summary;
pub mod validate;
