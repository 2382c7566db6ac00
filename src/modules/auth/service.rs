use chrono::Utc;

use super::repository::{self, Session};
use crate::types::Context;
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn verify_access_token(ctx: Arc<Context>, access_token: String) -> Result<Session> {
    let session = repository::find_by_access_token(&ctx.db_conn.pool, access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.access_token_expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}
