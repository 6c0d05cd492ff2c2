use rusqlite::{params, Connection};

use crate::db::models::{NewBookmark, NewSavedNews, NewsBookmark, SavedNews};

pub fn list_saved(conn: &Connection) -> rusqlite::Result<Vec<SavedNews>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, url, snippet, summary, created_at
         FROM saved_news
         ORDER BY created_at DESC, id DESC",
    )?;
    let news = stmt
        .query_map([], SavedNews::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(news)
}

pub fn insert_saved(conn: &Connection, news: &NewSavedNews) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO saved_news (title, url, snippet, summary) VALUES (?1, ?2, ?3, ?4)",
        params![news.title, news.url, news.snippet, news.summary],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_bookmarks(conn: &Connection) -> rusqlite::Result<Vec<NewsBookmark>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, url, snippet, created_at
         FROM news_bookmarks
         ORDER BY created_at DESC, id DESC",
    )?;
    let bookmarks = stmt
        .query_map([], NewsBookmark::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(bookmarks)
}

pub fn insert_bookmark(conn: &Connection, bookmark: &NewBookmark) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO news_bookmarks (title, url, snippet) VALUES (?1, ?2, ?3)",
        params![bookmark.title, bookmark.url, bookmark.snippet],
    )?;
    Ok(conn.last_insert_rowid())
}
