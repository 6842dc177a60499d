pub mod number;
pub mod range;
pub mod sixn;
pub mod visualization;
