use rusqlite::Connection;

use crate::db::models::Supply;

/// The catalogue is maintained outside the API; it is only ever read here.
pub fn list(conn: &Connection) -> rusqlite::Result<Vec<Supply>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, category, description, price, usage_guide, side_effects,
                store_url, image_url
         FROM supplies",
    )?;
    let supplies = stmt
        .query_map([], Supply::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(supplies)
}
