#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub friend_radius: Option<i64>,
    pub hobbies: String,
    pub interests: String,
    pub photo_url: Option<String>,
}
