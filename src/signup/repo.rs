use mongodb::bson::{doc, DateTime};
use mongodb::Collection;

use crate::signup::repo_types::User;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(
        users: &Collection<User>,
        email: &str,
    ) -> mongodb::error::Result<Option<User>> {
        users.find_one(doc! { "email": email }).await
    }

    /// Create a new user with hashed password. The creation timestamp is
    /// assigned here and never touched again.
    pub async fn create(
        users: &Collection<User>,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> mongodb::error::Result<User> {
        let user = User {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: DateTime::now(),
        };
        let inserted = users.insert_one(&user).await?;
        Ok(User {
            id: inserted.inserted_id.as_object_id(),
            ..user
        })
    }
}
