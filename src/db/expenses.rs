use rusqlite::{params, Connection};

use crate::db::models::{Expense, NewExpense};

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, plant_id, type, amount, description, date
         FROM expenses
         ORDER BY date DESC, id DESC",
    )?;
    let expenses = stmt
        .query_map([], Expense::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(expenses)
}

pub fn insert(conn: &Connection, expense: &NewExpense) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO expenses (plant_id, type, amount, description) VALUES (?1, ?2, ?3, ?4)",
        params![
            expense.plant_id,
            expense.kind,
            expense.amount,
            expense.description
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
