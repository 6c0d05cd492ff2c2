use rusqlite::types::ToSql;
use rusqlite::{params, Connection};

use crate::db::models::{
    Comment, CommentReply, CommentWithReplies, CommunityPost, NewComment, NewPost, NewReply,
    PostWithComments,
};

const POST_COLUMNS: &str = "id, author, nickname, content, image_url, likes, created_at";

/// Feed listing: posts newest first, each with its comments oldest first.
/// Replies are not attached here.
pub fn list_posts_with_comments(conn: &Connection) -> rusqlite::Result<Vec<PostWithComments>> {
    let mut posts_stmt = conn.prepare(&format!(
        "SELECT {POST_COLUMNS} FROM community_posts ORDER BY created_at DESC, id DESC"
    ))?;
    let posts = posts_stmt
        .query_map([], CommunityPost::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut comments_stmt = conn.prepare(
        "SELECT id, post_id, author, content, created_at
         FROM comments
         WHERE post_id = ?1
         ORDER BY created_at ASC, id ASC",
    )?;

    posts
        .into_iter()
        .map(|post| -> rusqlite::Result<PostWithComments> {
            let comments = comments_stmt
                .query_map(params![post.id], Comment::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(PostWithComments { post, comments })
        })
        .collect()
}

pub fn insert_post(conn: &Connection, post: &NewPost) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO community_posts (author, nickname, content, image_url)
         VALUES (?1, ?2, ?3, ?4)",
        params![post.author, post.nickname, post.content, post.image_url],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_post(conn: &Connection, id: i64) -> rusqlite::Result<CommunityPost> {
    conn.query_row(
        &format!("SELECT {POST_COLUMNS} FROM community_posts WHERE id = ?1"),
        params![id],
        CommunityPost::from_row,
    )
}

/// Single-statement increment, so concurrent likes never lose an update.
pub fn increment_likes(conn: &Connection, id: i64) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE community_posts SET likes = likes + 1 WHERE id = ?1",
        params![id],
    )
}

pub fn insert_comment(
    conn: &Connection,
    post_id: i64,
    comment: &NewComment,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO comments (post_id, author, content) VALUES (?1, ?2, ?3)",
        params![post_id, comment.author, comment.content],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_reply(
    conn: &Connection,
    comment_id: i64,
    reply: &NewReply,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO comment_replies (comment_id, author, content) VALUES (?1, ?2, ?3)",
        params![comment_id, reply.author, reply.content],
    )?;
    Ok(conn.last_insert_rowid())
}

/// A post's whole thread: comments oldest first, each with its replies
/// oldest first. A NULL post id matches nothing.
pub fn list_comments_with_replies(
    conn: &Connection,
    post_id: impl ToSql,
) -> rusqlite::Result<Vec<CommentWithReplies>> {
    let mut comments_stmt = conn.prepare(
        "SELECT id, post_id, author, content, created_at
         FROM comments
         WHERE post_id = ?1
         ORDER BY created_at ASC, id ASC",
    )?;
    let comments = comments_stmt
        .query_map(params![post_id], Comment::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut replies_stmt = conn.prepare(
        "SELECT id, comment_id, author, content, created_at
         FROM comment_replies
         WHERE comment_id = ?1
         ORDER BY created_at ASC, id ASC",
    )?;

    comments
        .into_iter()
        .map(|comment| -> rusqlite::Result<CommentWithReplies> {
            let replies = replies_stmt
                .query_map(params![comment.id], CommentReply::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(CommentWithReplies { comment, replies })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn new_post(content: &str) -> NewPost {
        NewPost {
            author: Some("a1".into()),
            nickname: Some("Al".into()),
            content: Some(content.into()),
            image_url: None,
        }
    }

    fn new_comment(content: &str) -> NewComment {
        NewComment {
            author: Some("b2".into()),
            content: Some(content.into()),
        }
    }

    #[test]
    fn new_post_starts_with_zero_likes() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let id = insert_post(&conn, &new_post("hello")).unwrap();

        let post = get_post(&conn, id).unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.content.as_deref(), Some("hello"));
        assert_eq!(post.nickname.as_deref(), Some("Al"));
    }

    #[test]
    fn get_missing_post_is_an_error() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        assert!(matches!(
            get_post(&conn, 99),
            Err(rusqlite::Error::QueryReturnedNoRows)
        ));
    }

    #[test]
    fn likes_increment_by_exactly_one_each_time() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let id = insert_post(&conn, &new_post("hello")).unwrap();

        for _ in 0..5 {
            assert_eq!(increment_likes(&conn, id).unwrap(), 1);
        }
        assert_eq!(get_post(&conn, id).unwrap().likes, 5);
    }

    #[test]
    fn liking_missing_post_touches_nothing() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        assert_eq!(increment_likes(&conn, 99).unwrap(), 0);
    }

    #[test]
    fn feed_is_newest_first_with_comments_oldest_first() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let older = insert_post(&conn, &new_post("older")).unwrap();
        let newer = insert_post(&conn, &new_post("newer")).unwrap();
        insert_comment(&conn, older, &new_comment("first")).unwrap();
        insert_comment(&conn, older, &new_comment("second")).unwrap();

        let feed = list_posts_with_comments(&conn).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].post.id, newer);
        assert!(feed[0].comments.is_empty());
        assert_eq!(feed[1].post.id, older);
        let contents: Vec<_> = feed[1]
            .comments
            .iter()
            .map(|c| c.content.as_deref())
            .collect();
        assert_eq!(contents, vec![Some("first"), Some("second")]);
    }

    #[test]
    fn replies_nest_under_their_comment() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let post = insert_post(&conn, &new_post("hello")).unwrap();
        let first = insert_comment(&conn, post, &new_comment("first")).unwrap();
        let second = insert_comment(&conn, post, &new_comment("second")).unwrap();
        insert_reply(
            &conn,
            second,
            &NewReply {
                author: Some("c3".into()),
                content: Some("agreed".into()),
                post_id: Some(post.into()),
            },
        )
        .unwrap();

        let thread = list_comments_with_replies(&conn, post).unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].comment.id, first);
        assert!(thread[0].replies.is_empty());
        assert_eq!(thread[1].comment.id, second);
        assert_eq!(thread[1].replies.len(), 1);
        assert_eq!(thread[1].replies[0].content.as_deref(), Some("agreed"));
        assert_eq!(thread[1].replies[0].comment_id, Some(second));
    }

    #[test]
    fn thread_for_no_post_is_empty() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let post = insert_post(&conn, &new_post("hello")).unwrap();
        insert_comment(&conn, post, &new_comment("first")).unwrap();

        assert!(list_comments_with_replies(&conn, None::<i64>).unwrap().is_empty());
    }
}
