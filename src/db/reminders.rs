use rusqlite::{params, Connection};

use crate::db::models::{NewReminder, Reminder};

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Reminder>> {
    let mut stmt = conn.prepare(
        "SELECT id, plant_id, title, time, status
         FROM reminders
         ORDER BY time ASC, id ASC",
    )?;
    let reminders = stmt
        .query_map([], Reminder::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(reminders)
}

pub fn insert(conn: &Connection, reminder: &NewReminder) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO reminders (plant_id, title, time) VALUES (?1, ?2, ?3)",
        params![reminder.plant_id, reminder.title, reminder.time],
    )?;
    Ok(conn.last_insert_rowid())
}
