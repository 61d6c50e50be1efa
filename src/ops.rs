use std::collections::HashMap;

use crate::expr::Expr;
use crate::table::{Schema, Table};
use crate::value::Value;

/// Keeps the rows of `table` for which `predicate` holds.
///
/// Input row order is preserved; the input table is left untouched and a new
/// table with the same schema is returned.
///
/// # Errors
/// Returns an error if the predicate references an unknown column or
/// compares incompatible types.
pub fn filter(table: &Table, predicate: &Expr) -> Result<Table, String> {
    let mut out = Table::new(table.name.clone(), table.schema.clone());

    for row in table.rows() {
        if predicate.matches(&row, &table.schema)? {
            out.insert(row)?;
        }
    }

    Ok(out)
}

/// Projects `table` onto the given columns.
///
/// The output schema is exactly `columns`, in the requested order, whatever
/// the order of the input schema. Row order is preserved.
///
/// # Errors
/// Returns an error if a requested column does not exist.
pub fn project(table: &Table, columns: &[&str]) -> Result<Table, String> {
    let indices = columns
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .ok_or_else(|| format!("Column {} not found in table {:?}", name, table.name))
        })
        .collect::<Result<Vec<usize>, String>>()?;

    let schema = Schema {
        columns: indices
            .iter()
            .map(|&idx| table.schema.columns[idx].clone())
            .collect(),
    };

    let mut out = Table::new(table.name.clone(), schema);
    for row in table.rows() {
        out.insert(indices.iter().map(|&idx| row[idx].clone()).collect())?;
    }

    Ok(out)
}

/// Left-outer-joins `left` with `right` on the column named `on`.
///
/// The output schema is every column of `left` in order, followed by every
/// column of `right` except the join key (which would duplicate the left
/// side's). Every left row appears at least once:
/// - zero matches on the right fill the right-side columns with NULL,
/// - several matches fan out into one output row per match, in the right
///   table's row order.
///
/// A NULL join key matches nothing, as in SQL, so such rows come out
/// NULL-filled. The major row order of the output is the left table's.
///
/// # Errors
/// Returns an error if either table lacks the join column.
pub fn left_outer_join(left: &Table, right: &Table, on: &str) -> Result<Table, String> {
    let left_key = left
        .column_index(on)
        .ok_or_else(|| format!("Column {} not found in table {:?}", on, left.name))?;
    let right_key = right
        .column_index(on)
        .ok_or_else(|| format!("Column {} not found in table {:?}", on, right.name))?;

    let mut columns = left.schema.columns.clone();
    columns.extend(
        right
            .schema
            .columns
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != right_key)
            .map(|(_, col)| col.clone()),
    );

    let mut out = Table::new(
        format!("{}_{}", left.name, right.name),
        Schema { columns },
    );

    // Index right rows by key value, keeping insertion order per key so that
    // fan-out rows come out in the right table's row order.
    let right_rows: Vec<Vec<Value>> = right.rows().collect();
    let mut by_key: HashMap<Value, Vec<usize>> = HashMap::new();
    for (idx, row) in right_rows.iter().enumerate() {
        let key = &row[right_key];
        if !key.is_null() {
            by_key.entry(key.clone()).or_default().push(idx);
        }
    }

    let right_width = right.schema.columns.len() - 1;

    for row in left.rows() {
        let key = &row[left_key];
        let matched = if key.is_null() { None } else { by_key.get(key) };

        match matched {
            Some(indices) => {
                for &right_idx in indices {
                    let mut out_row = row.clone();
                    out_row.extend(
                        right_rows[right_idx]
                            .iter()
                            .enumerate()
                            .filter(|(idx, _)| *idx != right_key)
                            .map(|(_, value)| value.clone()),
                    );
                    out.insert(out_row)?;
                }
            }
            None => {
                let mut out_row = row.clone();
                out_row.extend(std::iter::repeat(Value::Null).take(right_width));
                out.insert(out_row)?;
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;
    use crate::expr::ComparisonOp;
    use crate::table::ColumnDef;

    fn users_table() -> Table {
        let schema = Schema {
            columns: vec![
                ColumnDef {
                    name: "id".into(),
                    data_type: DataType::Int,
                },
                ColumnDef {
                    name: "name".into(),
                    data_type: DataType::Text,
                },
                ColumnDef {
                    name: "age".into(),
                    data_type: DataType::Int,
                },
            ],
        };

        let mut table = Table::new("users".into(), schema);
        table
            .insert(vec![Value::Int(1), Value::Text("Alice".into()), Value::Int(30)])
            .unwrap();
        table
            .insert(vec![Value::Int(2), Value::Text("Bob".into()), Value::Null])
            .unwrap();
        table
            .insert(vec![Value::Int(3), Value::Text("Charlie".into()), Value::Int(25)])
            .unwrap();
        table
    }

    #[test]
    fn test_filter_preserves_order() {
        let users = users_table();
        let adults = Expr::Comparison {
            column: "age".into(),
            op: ComparisonOp::Gt,
            value: Value::Int(20),
        };

        let result = filter(&users, &adults).unwrap();

        assert_eq!(result.row_count, 2);
        assert_eq!(result.get_row(0).unwrap()[1], Value::Text("Alice".into()));
        assert_eq!(result.get_row(1).unwrap()[1], Value::Text("Charlie".into()));
        // input untouched
        assert_eq!(users.row_count, 3);
    }

    #[test]
    fn test_filter_null_excluded_by_comparison() {
        let users = users_table();
        let predicate = Expr::Comparison {
            column: "age".into(),
            op: ComparisonOp::Ne,
            value: Value::Int(30),
        };

        let result = filter(&users, &predicate).unwrap();

        // Bob's NULL age fails the comparison under three-valued logic
        assert_eq!(result.row_count, 1);
        assert_eq!(result.get_row(0).unwrap()[1], Value::Text("Charlie".into()));
    }

    #[test]
    fn test_filter_unknown_column() {
        let users = users_table();
        let predicate = Expr::IsNull("salary".into());

        assert!(filter(&users, &predicate).is_err());
    }

    #[test]
    fn test_project_reorders_columns() {
        let users = users_table();

        let result = project(&users, &["name", "id"]).unwrap();

        let names: Vec<String> = result
            .schema
            .columns
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["name", "id"]);
        assert_eq!(
            result.get_row(0).unwrap(),
            vec![Value::Text("Alice".into()), Value::Int(1)]
        );
    }

    #[test]
    fn test_project_unknown_column() {
        let users = users_table();

        assert!(project(&users, &["name", "salary"]).is_err());
    }

    fn orders_table() -> Table {
        let schema = Schema {
            columns: vec![
                ColumnDef {
                    name: "order_id".into(),
                    data_type: DataType::Int,
                },
                ColumnDef {
                    name: "id".into(),
                    data_type: DataType::Int,
                },
                ColumnDef {
                    name: "item".into(),
                    data_type: DataType::Text,
                },
            ],
        };

        let mut table = Table::new("orders".into(), schema);
        table
            .insert(vec![Value::Int(10), Value::Int(1), Value::Text("book".into())])
            .unwrap();
        table
            .insert(vec![Value::Int(11), Value::Int(3), Value::Text("pen".into())])
            .unwrap();
        table
            .insert(vec![Value::Int(12), Value::Int(1), Value::Text("lamp".into())])
            .unwrap();
        table
    }

    #[test]
    fn test_join_schema_drops_duplicate_key() {
        let users = users_table();
        let orders = orders_table();

        let result = left_outer_join(&users, &orders, "id").unwrap();

        let names: Vec<String> = result
            .schema
            .columns
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["id", "name", "age", "order_id", "item"]);
    }

    #[test]
    fn test_join_fan_out_and_null_fill() {
        let users = users_table();
        let orders = orders_table();

        let result = left_outer_join(&users, &orders, "id").unwrap();

        // Alice has two orders, Bob none, Charlie one
        assert_eq!(result.row_count, 4);

        assert_eq!(
            result.get_row(0).unwrap(),
            vec![
                Value::Int(1),
                Value::Text("Alice".into()),
                Value::Int(30),
                Value::Int(10),
                Value::Text("book".into())
            ]
        );
        assert_eq!(
            result.get_row(1).unwrap(),
            vec![
                Value::Int(1),
                Value::Text("Alice".into()),
                Value::Int(30),
                Value::Int(12),
                Value::Text("lamp".into())
            ]
        );
        assert_eq!(
            result.get_row(2).unwrap(),
            vec![
                Value::Int(2),
                Value::Text("Bob".into()),
                Value::Null,
                Value::Null,
                Value::Null
            ]
        );
        assert_eq!(
            result.get_row(3).unwrap(),
            vec![
                Value::Int(3),
                Value::Text("Charlie".into()),
                Value::Int(25),
                Value::Int(11),
                Value::Text("pen".into())
            ]
        );
    }

    #[test]
    fn test_join_null_key_matches_nothing() {
        let schema = Schema {
            columns: vec![ColumnDef {
                name: "id".into(),
                data_type: DataType::Int,
            }],
        };
        let mut left = Table::new("left".into(), schema.clone());
        left.insert(vec![Value::Null]).unwrap();

        let mut right_schema_cols = schema.columns.clone();
        right_schema_cols.push(ColumnDef {
            name: "tag".into(),
            data_type: DataType::Text,
        });
        let mut right = Table::new(
            "right".into(),
            Schema {
                columns: right_schema_cols,
            },
        );
        // a NULL key on the right must not pair with the NULL on the left
        right.insert(vec![Value::Null, Value::Text("x".into())]).unwrap();

        let result = left_outer_join(&left, &right, "id").unwrap();

        assert_eq!(result.row_count, 1);
        assert_eq!(result.get_row(0).unwrap(), vec![Value::Null, Value::Null]);
    }

    #[test]
    fn test_join_missing_key_column() {
        let users = users_table();
        let orders = orders_table();

        assert!(left_outer_join(&users, &orders, "uuid").is_err());
    }
}
