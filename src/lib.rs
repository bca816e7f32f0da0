pub mod error;
pub mod rbtree;
pub mod set;

pub use error::{ InvariantViolation, TreeError };
pub use rbtree::{ Color, CompareBy, CompareGreater, CompareLess, NodeRef, Tree, TreeCompare };
pub use set::Set;
