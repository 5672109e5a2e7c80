pub mod a001_movie;
pub mod a002_category;
pub mod common;
