use crate::table::Schema;
use crate::value::Value;

/// Comparison operators usable in a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Gt,
    Lt,
}

/// A filter predicate, evaluated row by row.
///
/// Plays the role a SQL `WHERE` clause would: comparisons of a column against
/// a literal, combined with `AND` / `OR`, plus an explicit `IS NULL` test.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Comparison {
        column: String,
        op: ComparisonOp,
        value: Value,
    },
    /// True when the named column is NULL in the row under test.
    ///
    /// Comparisons collapse to false as soon as a NULL is involved, so this
    /// is the only way to select NULL cells.
    IsNull(String),
    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Evaluates the predicate against a single row.
    ///
    /// # Arguments
    /// * `row` - The complete row (all columns in schema order)
    /// * `schema` - Table schema used to resolve column indices
    ///
    /// # Returns
    /// * `Ok(true)` - The row satisfies the condition
    /// * `Ok(false)` - The row does not match
    /// * `Err(...)` - Invalid column name or type mismatch
    pub fn matches(&self, row: &[Value], schema: &Schema) -> Result<bool, String> {
        match self {
            Expr::Comparison { column, op, value } => {
                let row_value = resolve(column, row, schema)?;
                compare_values(row_value, op, value)
            }
            Expr::IsNull(column) => Ok(resolve(column, row, schema)?.is_null()),
            Expr::Or { left, right } => {
                Ok(left.matches(row, schema)? || right.matches(row, schema)?)
            }
            Expr::And { left, right } => {
                let left_result = left.matches(row, schema)?;
                if !left_result {
                    return Ok(false);
                }
                right.matches(row, schema)
            }
        }
    }
}

/// Looks up a column by name and returns the row's value for it.
fn resolve<'a>(column: &str, row: &'a [Value], schema: &Schema) -> Result<&'a Value, String> {
    let col_idx = schema
        .columns
        .iter()
        .position(|c| c.name == column)
        .ok_or_else(|| format!("Column {} not found", column))?;

    Ok(&row[col_idx])
}

/// Compares two values using a comparison operator.
///
/// # SQL NULL Semantics
/// `NULL` compared to anything (including `NULL`) always returns `false`,
/// whatever the operator. This matches standard SQL three-valued logic, and
/// it means `Ne` does NOT match NULL cells; use [Expr::IsNull] for that.
///
/// # Supported Comparisons
/// - **Integers**: `=`, `!=`, `>`, `<`
/// - **Text**: `=`, `!=`
///
/// # Errors
/// Returns an error if comparing incompatible types (e.g., `Int` vs `Text`).
fn compare_values(left: &Value, op: &ComparisonOp, right: &Value) -> Result<bool, String> {
    // NULL handling: NULL compared to anything = false
    if left.is_null() || right.is_null() {
        return Ok(false);
    }

    match (left, op, right) {
        // Int comparisons
        (Value::Int(l), ComparisonOp::Eq, Value::Int(r)) => Ok(l == r),
        (Value::Int(l), ComparisonOp::Ne, Value::Int(r)) => Ok(l != r),
        (Value::Int(l), ComparisonOp::Gt, Value::Int(r)) => Ok(l > r),
        (Value::Int(l), ComparisonOp::Lt, Value::Int(r)) => Ok(l < r),

        // Text comparisons
        (Value::Text(l), ComparisonOp::Eq, Value::Text(r)) => Ok(l == r),
        (Value::Text(l), ComparisonOp::Ne, Value::Text(r)) => Ok(l != r),

        // Type mismatch
        _ => Err(format!(
            "Type mismatch: cannot compare {:?} with {:?}",
            left, right
        )),
    }
}
