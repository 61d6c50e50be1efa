use crate::column::Column;
use crate::data_type::DataType;
use crate::value::Value;

/// Column definition in the schema
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone)]
pub struct Schema {
    pub columns: Vec<ColumnDef>,
}

/// An in-memory table: an ordered sequence of rows sharing one schema.
///
/// Query operations never mutate a table they receive; they build and return
/// a fresh one.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub schema: Schema,
    pub columns: Vec<Column>,
    pub row_count: usize,
}

impl Table {
    pub fn new(name: String, schema: Schema) -> Self {
        let columns = schema
            .columns
            .iter()
            .map(|column| Column::new(column.name.clone(), column.data_type))
            .collect();
        Self {
            name,
            schema,
            columns,
            row_count: 0,
        }
    }

    /// insert a new row
    pub fn insert(&mut self, values: Vec<Value>) -> Result<(), String> {
        // different sizes
        if values.len() != self.schema.columns.len() {
            return Err(format!(
                "size of the row mismatched with the size of a table row, {:?} vs {:?}",
                values.len(),
                self.schema.columns.len()
            ));
        }
        for (i, value) in values.into_iter().enumerate() {
            // different types
            if value
                .data_type()
                .is_some_and(|t| t != self.schema.columns[i].data_type)
            {
                return Err(format!(
                    "type of value {:?} mismatch with schema column type: {:?} vs {:?}",
                    value,
                    value.data_type(),
                    self.schema.columns[i].data_type
                ));
            }
            self.columns[i].push(value)?;
        }
        self.row_count += 1;
        Ok(())
    }

    pub fn get_row(&self, row_idx: usize) -> Option<Vec<Value>> {
        if self.row_count <= row_idx {
            return None;
        }
        self.columns
            .iter()
            .map(|col| col.get(row_idx)) // -> Option<Value>
            .collect()
    }

    pub fn get_col(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Position of a column in the schema, or `None` if the name is unknown.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.columns.iter().position(|c| c.name == name)
    }

    /// Iterates over the rows of the table in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.row_count).filter_map(|idx| self.get_row(idx))
    }
}
