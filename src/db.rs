use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use tracing::info;

use crate::error::StartupError;
use crate::signup::User;

pub const DB_NAME: &str = "enroll";
pub const USERS_COLLECTION: &str = "users";

/// Bound on connection setup; a cluster that does not answer the liveness
/// probe within this window is treated as unreachable.
const CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Open the record store and return the handle to the users collection.
///
/// Parses the connection string, probes the server with `ping`, and ensures
/// the unique email index before handing the collection out. Every failure is
/// classified into the startup taxonomy; nothing is retried.
pub async fn connect(uri: &str) -> Result<Collection<User>, StartupError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(StartupError::from_mongo)?;
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);
    options.connect_timeout = Some(CONNECT_TIMEOUT);

    let client = Client::with_options(options).map_err(StartupError::from_mongo)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(StartupError::from_mongo)?;
    info!("connected to the record store");

    let users = client.database(DB_NAME).collection::<User>(USERS_COLLECTION);
    ensure_email_index(&users)
        .await
        .map_err(StartupError::from_mongo)?;

    Ok(users)
}

/// Unique index on `email`, so two racing signups cannot both insert.
pub async fn ensure_email_index(users: &Collection<User>) -> mongodb::error::Result<()> {
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    users.create_index(index).await?;
    Ok(())
}
