pub mod cv;
pub mod selection;
