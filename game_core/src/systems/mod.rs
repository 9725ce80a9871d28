pub mod bird;
pub mod collision;
pub mod input;
pub mod pipes;
pub mod scrolling;

pub use bird::*;
pub use collision::*;
pub use input::*;
pub use pipes::*;
pub use scrolling::*;
