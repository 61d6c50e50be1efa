//! Self-contained solutions to classic table-query exercises, each mirroring
//! a single SQL query over caller-built in-memory tables.

use crate::expr::{ComparisonOp, Expr};
use crate::ops::{filter, left_outer_join, project};
use crate::table::Table;
use crate::value::Value;

/// "Combine Two Tables": report first name, last name, city and state of
/// every person, whether or not they have an address.
///
/// Equivalent SQL:
/// `SELECT firstName, lastName, city, state FROM Person LEFT JOIN Address ON
/// Person.personId = Address.personId`
///
/// Every person row appears once per matching address, or once with NULL
/// `city` and `state` when no address matches. The person table's row order
/// is preserved and `personId` never appears in the output.
///
/// # Errors
/// Returns an error if `person` lacks a `personId`, `firstName` or
/// `lastName` column, or `address` lacks `personId`, `city` or `state`.
pub fn combine_two_tables(person: &Table, address: &Table) -> Result<Table, String> {
    let joined = left_outer_join(person, address, "personId")?;
    project(&joined, &["firstName", "lastName", "city", "state"])
}

/// "Find Customer Referee": names of the customers not referred by the
/// customer with id 2.
///
/// Equivalent SQL:
/// `SELECT name FROM Customer WHERE referee_id != 2 OR referee_id IS NULL`
///
/// The `IS NULL` disjunct is load-bearing: under three-valued logic a plain
/// `referee_id != 2` is false for NULL cells, and customers without a
/// referee must be included. Input row order is preserved.
///
/// # Example
/// ```
/// use tabula::exercises::find_customer_referee;
/// use tabula::{ColumnDef, DataType, Schema, Table, Value};
///
/// let schema = Schema {
///     columns: vec![
///         ColumnDef { name: "id".into(), data_type: DataType::Int },
///         ColumnDef { name: "name".into(), data_type: DataType::Text },
///         ColumnDef { name: "referee_id".into(), data_type: DataType::Int },
///     ],
/// };
/// let mut customer = Table::new("Customer".into(), schema);
/// customer.insert(vec![Value::Int(1), Value::Text("Will".into()), Value::Null]).unwrap();
/// customer.insert(vec![Value::Int(3), Value::Text("Alex".into()), Value::Int(2)]).unwrap();
///
/// let result = find_customer_referee(&customer).unwrap();
///
/// assert_eq!(result.row_count, 1);
/// assert_eq!(result.get_row(0).unwrap(), vec![Value::Text("Will".into())]);
/// ```
///
/// # Errors
/// Returns an error if `customer` lacks a `name` or `referee_id` column.
pub fn find_customer_referee(customer: &Table) -> Result<Table, String> {
    let keep = Expr::Or {
        left: Box::new(Expr::Comparison {
            column: "referee_id".into(),
            op: ComparisonOp::Ne,
            value: Value::Int(2),
        }),
        right: Box::new(Expr::IsNull("referee_id".into())),
    };

    let filtered = filter(customer, &keep)?;
    project(&filtered, &["name"])
}
