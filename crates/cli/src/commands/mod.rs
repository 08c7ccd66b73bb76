pub mod generate;
pub mod inspect;

pub use generate::generate_command;
pub use inspect::inspect_command;
