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
    let hotel = repository::find_by_id(&ctx.db_conn.pool, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchHotel)?
        .ok_or(response::Error::HotelNotFound)?;

    if hotel.owner_id != auth.user.id {
        return Err(response::Error::HotelNotFound);
    }

    Ok(response::Success::Hotel(hotel))
}
