use rusqlite::types::{FromSql, FromSqlResult, Null, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A client-supplied column value, kept as whatever JSON scalar arrived.
///
/// Nothing is type-checked on the way in: the value is bound as-is and the
/// column's SQLite affinity decides how it is stored, so `"12.5"` lands in a
/// `REAL` column as 12.5 and `2` in a `TEXT` column as `"2"`. Reading goes
/// the other way and never fails, whatever storage class the row ended up
/// with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field(pub Value);

impl ToSql for Field {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match &self.0 {
            Value::Null => ToSqlOutput::from(Null),
            Value::Bool(b) => ToSqlOutput::from(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ToSqlOutput::from(i),
                None => ToSqlOutput::from(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => ToSqlOutput::from(s.as_str()),
            // Arrays and objects are kept as their JSON text
            other => ToSqlOutput::from(other.to_string()),
        })
    }
}

impl FromSql for Field {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(Field(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::from(i),
            ValueRef::Real(f) => Value::from(f),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Value::String(String::from_utf8_lossy(bytes).into_owned())
            }
        }))
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field(Value::from(s))
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field(Value::from(s))
    }
}

impl From<i64> for Field {
    fn from(i: i64) -> Self {
        Field(Value::from(i))
    }
}

impl From<f64> for Field {
    fn from(f: f64) -> Self {
        Field(Value::from(f))
    }
}

// Row types. JSON field names match column names; every user-supplied
// column is nullable because nothing is validated on the way in.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: i64,
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<String>,
    pub planting_date: Option<Field>,
    pub location: Option<String>,
    pub health_status: Option<String>,
    pub last_care: Option<String>,
    pub image_url: Option<String>,
    /// One of `fruit`, `ornamental`, `indoor`, `outdoor` by convention.
    pub category: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthLog {
    pub id: i64,
    pub plant_id: Option<i64>,
    pub height: Option<Field>,
    pub leaf_count: Option<Field>,
    pub health_score: Option<Field>,
    pub note: Option<String>,
    pub image_url: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    pub id: i64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub usage_guide: Option<String>,
    pub side_effects: Option<String>,
    pub store_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedNews {
    pub id: i64,
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
    pub summary: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i64,
    pub plant_id: Option<Field>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    /// `growth`, `care` or `disease`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: i64,
    pub author: Option<String>,
    pub nickname: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub likes: i64,
    pub created_at: String,
}

/// A post as listed in the feed: comments attached, replies not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostWithComments {
    #[serde(flatten)]
    pub post: CommunityPost,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: Option<i64>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentWithReplies {
    #[serde(flatten)]
    pub comment: Comment,
    pub replies: Vec<CommentReply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentReply {
    pub id: i64,
    pub comment_id: Option<i64>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub plant_id: Option<Field>,
    /// `fertilizer`, `water`, `seed` or `other`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<Field>,
    pub description: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub plant_id: Option<Field>,
    pub title: Option<String>,
    pub time: Option<Field>,
    /// Always `pending` today; nothing moves a reminder to `completed`.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsBookmark {
    pub id: i64,
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
    pub created_at: String,
}

impl Plant {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            species: row.get("species")?,
            age: row.get("age")?,
            planting_date: row.get("planting_date")?,
            location: row.get("location")?,
            health_status: row.get("health_status")?,
            last_care: row.get("last_care")?,
            image_url: row.get("image_url")?,
            category: row.get("category")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl GrowthLog {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            plant_id: row.get("plant_id")?,
            height: row.get("height")?,
            leaf_count: row.get("leaf_count")?,
            health_score: row.get("health_score")?,
            note: row.get("note")?,
            image_url: row.get("image_url")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl Supply {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            category: row.get("category")?,
            description: row.get("description")?,
            price: row.get("price")?,
            usage_guide: row.get("usage_guide")?,
            side_effects: row.get("side_effects")?,
            store_url: row.get("store_url")?,
            image_url: row.get("image_url")?,
        })
    }
}

impl SavedNews {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            url: row.get("url")?,
            snippet: row.get("snippet")?,
            summary: row.get("summary")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl DiaryEntry {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            plant_id: row.get("plant_id")?,
            content: row.get("content")?,
            image_url: row.get("image_url")?,
            kind: row.get("type")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl CommunityPost {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            author: row.get("author")?,
            nickname: row.get("nickname")?,
            content: row.get("content")?,
            image_url: row.get("image_url")?,
            likes: row.get("likes")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl Comment {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            post_id: row.get("post_id")?,
            author: row.get("author")?,
            content: row.get("content")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl CommentReply {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            comment_id: row.get("comment_id")?,
            author: row.get("author")?,
            content: row.get("content")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl Expense {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            plant_id: row.get("plant_id")?,
            kind: row.get("type")?,
            amount: row.get("amount")?,
            description: row.get("description")?,
            date: row.get("date")?,
        })
    }
}

impl Reminder {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            plant_id: row.get("plant_id")?,
            title: row.get("title")?,
            time: row.get("time")?,
            status: row.get("status")?,
        })
    }
}

impl NewsBookmark {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            url: row.get("url")?,
            snippet: row.get("snippet")?,
            created_at: row.get("created_at")?,
        })
    }
}

// --- Request bodies ---
//
// Every field is optional; whatever is missing is stored as NULL. Values are
// taken in any JSON shape, see [`Field`].

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: Option<Field>,
    pub species: Option<Field>,
    pub age: Option<Field>,
    pub planting_date: Option<Field>,
    pub location: Option<Field>,
    pub health_status: Option<Field>,
    pub image_url: Option<Field>,
    pub category: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewGrowthLog {
    pub height: Option<Field>,
    pub leaf_count: Option<Field>,
    pub health_score: Option<Field>,
    pub note: Option<Field>,
    pub image_url: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSavedNews {
    pub title: Option<Field>,
    pub url: Option<Field>,
    pub snippet: Option<Field>,
    pub summary: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDiaryEntry {
    pub plant_id: Option<Field>,
    pub content: Option<Field>,
    pub image_url: Option<Field>,
    #[serde(rename = "type")]
    pub kind: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub author: Option<Field>,
    pub nickname: Option<Field>,
    pub content: Option<Field>,
    pub image_url: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewComment {
    pub author: Option<Field>,
    pub content: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReply {
    pub author: Option<Field>,
    pub content: Option<Field>,
    /// Post whose comment thread is returned and broadcast afterwards.
    #[serde(rename = "postId")]
    pub post_id: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewExpense {
    pub plant_id: Option<Field>,
    #[serde(rename = "type")]
    pub kind: Option<Field>,
    pub amount: Option<Field>,
    pub description: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewReminder {
    pub plant_id: Option<Field>,
    pub title: Option<Field>,
    pub time: Option<Field>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBookmark {
    pub title: Option<Field>,
    pub url: Option<Field>,
    pub snippet: Option<Field>,
}
