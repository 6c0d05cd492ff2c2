use rusqlite::{params, Connection};

use crate::db::models::{GrowthLog, NewGrowthLog, NewPlant, Plant};

pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Plant>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, species, age, planting_date, location, health_status,
                last_care, image_url, category, created_at
         FROM plants
         ORDER BY created_at DESC, id DESC",
    )?;
    let plants = stmt
        .query_map([], Plant::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(plants)
}

pub fn insert(conn: &Connection, plant: &NewPlant) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO plants (name, species, age, planting_date, location, health_status,
                             image_url, category)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            plant.name,
            plant.species,
            plant.age,
            plant.planting_date,
            plant.location,
            plant.health_status,
            plant.image_url,
            plant.category,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Removes the plant and its diary entries. Growth logs, expenses and
/// reminders are left in place, still pointing at the removed id.
pub fn delete_with_diary(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM plants WHERE id = ?1", params![id])?;
    conn.execute("DELETE FROM diary WHERE plant_id = ?1", params![id])?;
    Ok(())
}

pub fn list_growth(conn: &Connection, plant_id: i64) -> rusqlite::Result<Vec<GrowthLog>> {
    let mut stmt = conn.prepare(
        "SELECT id, plant_id, height, leaf_count, health_score, note, image_url, created_at
         FROM growth_logs
         WHERE plant_id = ?1
         ORDER BY created_at ASC, id ASC",
    )?;
    let logs = stmt
        .query_map(params![plant_id], GrowthLog::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(logs)
}

pub fn insert_growth(
    conn: &Connection,
    plant_id: i64,
    log: &NewGrowthLog,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO growth_logs (plant_id, height, leaf_count, health_score, note, image_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            plant_id,
            log.height,
            log.leaf_count,
            log.health_score,
            log.note,
            log.image_url,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
