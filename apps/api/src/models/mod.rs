pub mod cv;
pub mod design;
