use rusqlite::{params, Connection};

use crate::db::models::{DiaryEntry, NewDiaryEntry};

pub fn list_for_plant(conn: &Connection, plant_id: i64) -> rusqlite::Result<Vec<DiaryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, plant_id, content, image_url, type, created_at
         FROM diary
         WHERE plant_id = ?1
         ORDER BY created_at DESC, id DESC",
    )?;
    let entries = stmt
        .query_map(params![plant_id], DiaryEntry::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(entries)
}

pub fn insert(conn: &Connection, entry: &NewDiaryEntry) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO diary (plant_id, content, image_url, type) VALUES (?1, ?2, ?3, ?4)",
        params![entry.plant_id, entry.content, entry.image_url, entry.kind],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    conn.execute("DELETE FROM diary WHERE id = ?1", params![id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn entry(plant_id: i64, content: &str, kind: &str) -> NewDiaryEntry {
        NewDiaryEntry {
            plant_id: Some(plant_id.into()),
            content: Some(content.into()),
            image_url: None,
            kind: Some(kind.into()),
        }
    }

    #[test]
    fn entries_are_newest_first_per_plant() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        insert(&conn, &entry(1, "sprouted", "growth")).unwrap();
        insert(&conn, &entry(1, "fed", "care")).unwrap();
        insert(&conn, &entry(2, "spots", "disease")).unwrap();

        let entries = list_for_plant(&conn, 1).unwrap();
        let contents: Vec<_> = entries.iter().map(|e| e.content.as_deref()).collect();
        assert_eq!(contents, vec![Some("fed"), Some("sprouted")]);
        assert_eq!(entries[0].kind.as_deref(), Some("care"));
    }

    #[test]
    fn delete_removes_single_entry() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let keep = insert(&conn, &entry(1, "keep", "care")).unwrap();
        let gone = insert(&conn, &entry(1, "gone", "care")).unwrap();

        delete(&conn, gone).unwrap();

        let entries = list_for_plant(&conn, 1).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, keep);
    }

    #[test]
    fn deleting_missing_entry_is_not_an_error() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        assert!(delete(&conn, 42).is_ok());
    }
}
