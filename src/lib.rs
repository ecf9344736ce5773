pub mod arithmetic;
pub mod equation;
pub mod error;
pub mod input;
pub mod range;
pub mod report;
