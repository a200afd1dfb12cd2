pub mod mock_host;
pub mod traits;
pub mod types;

pub use mock_host::{MockHost, MockSketch};
pub use traits::*;
pub use types::*;
