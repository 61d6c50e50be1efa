use tabula::{
    ColumnDef, DataType, Schema, Table, Value, combine_two_tables, find_customer_referee,
};

fn print_table(table: &Table) {
    let header: Vec<&str> = table
        .schema
        .columns
        .iter()
        .map(|col| col.name.as_str())
        .collect();
    println!("{}", header.join(" | "));
    println!("{}", "-".repeat(16 * header.len()));

    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|value| match value {
                Value::Null => "NULL".into(),
                Value::Int(i) => i.to_string(),
                Value::Text(s) => s.to_string(),
            })
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!();
}

fn main() -> Result<(), String> {
    println!("Table-Query Exercises Demo\n");

    // Combine Two Tables
    let mut person = Table::new(
        "Person".into(),
        Schema {
            columns: vec![
                ColumnDef {
                    name: "personId".into(),
                    data_type: DataType::Int,
                },
                ColumnDef {
                    name: "lastName".into(),
                    data_type: DataType::Text,
                },
                ColumnDef {
                    name: "firstName".into(),
                    data_type: DataType::Text,
                },
            ],
        },
    );
    person.insert(vec![
        Value::Int(1),
        Value::Text("Wang".into()),
        Value::Text("Allen".into()),
    ])?;
    person.insert(vec![
        Value::Int(2),
        Value::Text("Alice".into()),
        Value::Text("Bob".into()),
    ])?;

    let mut address = Table::new(
        "Address".into(),
        Schema {
            columns: vec![
                ColumnDef {
                    name: "addressId".into(),
                    data_type: DataType::Int,
                },
                ColumnDef {
                    name: "personId".into(),
                    data_type: DataType::Int,
                },
                ColumnDef {
                    name: "city".into(),
                    data_type: DataType::Text,
                },
                ColumnDef {
                    name: "state".into(),
                    data_type: DataType::Text,
                },
            ],
        },
    );
    address.insert(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Text("New York City".into()),
        Value::Text("New York".into()),
    ])?;
    address.insert(vec![
        Value::Int(2),
        Value::Int(3),
        Value::Text("Leetcode".into()),
        Value::Text("California".into()),
    ])?;

    println!("Combine Two Tables:");
    print_table(&combine_two_tables(&person, &address)?);

    // Find Customer Referee
    let mut customer = Table::new(
        "Customer".into(),
        Schema {
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
                    name: "referee_id".into(),
                    data_type: DataType::Int,
                },
            ],
        },
    );
    for (id, name, referee) in [
        (1, "Will", None),
        (2, "Jane", None),
        (3, "Alex", Some(2)),
        (4, "Bill", None),
        (5, "Zack", Some(1)),
        (6, "Mark", Some(2)),
    ] {
        customer.insert(vec![
            Value::Int(id),
            Value::Text(name.into()),
            referee.map_or(Value::Null, Value::Int),
        ])?;
    }

    println!("Find Customer Referee:");
    print_table(&find_customer_referee(&customer)?);

    Ok(())
}
