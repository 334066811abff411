pub mod formatter;

pub use formatter::SolutionFormatter;
