pub mod circle;
pub mod line;
pub mod r2;
pub mod rect;
