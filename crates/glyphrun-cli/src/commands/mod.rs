pub mod draw;
pub mod info;
pub mod measure;
