pub mod batch;
pub mod mesh;
pub mod point;

pub use batch::*;
pub use mesh::*;
pub use point::*;
