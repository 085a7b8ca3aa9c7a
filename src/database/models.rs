use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct StoredEntry {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}
