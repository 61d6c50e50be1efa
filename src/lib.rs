pub mod column;
pub mod data_type;
pub mod exercises;
pub mod expr;
pub mod ops;
pub mod table;
pub mod value;

pub use column::Column;
pub use data_type::DataType;
pub use exercises::{combine_two_tables, find_customer_referee};
pub use expr::{ComparisonOp, Expr};
pub use table::{ColumnDef, Schema, Table};
pub use value::Value;
