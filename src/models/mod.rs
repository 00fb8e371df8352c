pub mod crop;
pub mod environmental;
pub mod verdict;

pub use crop::*;
pub use environmental::*;
pub use verdict::*;
