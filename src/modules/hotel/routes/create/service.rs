use super::types::{request, response};
use crate::{
    modules::{auth::middleware::Auth, hotel::repository},
    types::Context,
    utils::storage,
};
use std::sync::Arc;
use validator::Validate;

const MAX_IMAGE_COUNT: usize = 6;

pub async fn service(ctx: Arc<Context>, auth: Auth, body: request::Body) -> response::Response {
    body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if body.images.len() > MAX_IMAGE_COUNT {
        return Err(response::Error::TooManyImages);
    }

    let uploads = body
        .images
        .into_iter()
        .map(|image| storage::upload_file(ctx.storage.clone(), image.contents.to_vec()));

    // result order follows field order, so the stored sequence matches the submission
    let images = futures::future::try_join_all(uploads)
        .await
        .map_err(|err| {
            tracing::error!("Failed to upload file: {:?}", err);
            response::Error::FailedToCreateHotel
        })?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateHotelPayload {
            name: body.name,
            city: body.city,
            country: body.country,
            description: body.description,
            r#type: body.type_,
            price_per_night: body.price_per_night.0,
            facilities: body.facilities,
            images,
            owner_id: auth.user.id.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateHotel)
    .map(response::Success::HotelCreated)
}

#[cfg(test)]
mod tests {
    use crate::utils::storage::UploadedMedia;

    #[tokio::test]
    async fn concurrent_uploads_preserve_submission_order() {
        let uploads = (0..4).map(|index| async move {
            if index % 2 == 0 {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            }

            Ok::<_, ()>(UploadedMedia {
                public_id: format!("hotels/{index}"),
                url: format!("https://media.test/hotels/{index}.jpg"),
                timestamp: index as i64,
            })
        });

        let images = futures::future::try_join_all(uploads).await.unwrap();

        let urls: Vec<_> = images.iter().map(|media| media.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://media.test/hotels/0.jpg",
                "https://media.test/hotels/1.jpg",
                "https://media.test/hotels/2.jpg",
                "https://media.test/hotels/3.jpg",
            ]
        );
    }
}
