pub mod console;
pub mod random;

pub use console::ConsoleProvider;
pub use random::RandomProvider;
