// Version normalization and comparison
//
// Release version strings carry an optional qualifier (beta, release
// candidate, service release) and an optional hyphen-introduced bugfix
// number. Normalization turns them into strictly numeric dotted strings
// with a fixed qualifier precedence, so two versions can be compared
// segment by segment.

pub mod convert;
pub mod compare;

pub use convert::convert;
pub use compare::{compare, compare_with_operator, ComparisonOperator};
