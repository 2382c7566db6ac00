use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, hotel::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    payload: request::Payload,
) -> response::Response {
    repository::find_many_by_owner_id(
        &ctx.db_conn.pool,
        auth.user.id.clone(),
        payload.pagination,
    )
    .await
    .map_err(|_| response::Error::FailedToFetchHotels)
    .map(response::Success::Hotels)
}
