pub mod package;
pub mod position;
pub mod type_expr;

// Re-export commonly used types
pub use package::{Interface, Method, Package, Param};
pub use position::Position;
pub use type_expr::{TypeExpr, UNRECOGNISED};
