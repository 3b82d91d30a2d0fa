pub mod comparison;
pub mod matrix;
pub mod polarity;
pub mod product;
pub mod spec_sheet;
pub mod verdict;

pub use comparison::{ComparisonRow, ComparisonTable};
pub use matrix::{MatrixRow, SpecMatrix};
pub use polarity::{Polarity, PolarityRule};
pub use product::Product;
pub use spec_sheet::SpecSheet;
pub use verdict::Verdict;
