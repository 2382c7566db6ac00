use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::{BigDecimal, Json};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};
use crate::utils::storage::UploadedMedia;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub price_per_night: BigDecimal,
    pub facilities: Vec<String>,
    pub images: Json<Vec<UploadedMedia>>,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateHotelPayload {
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub r#type: String,
    pub price_per_night: BigDecimal,
    pub facilities: Vec<String>,
    pub images: Vec<UploadedMedia>,
    pub owner_id: String,
}

pub enum Error {
    UnexpectedError,
}

pub async fn create<'e>(e: impl PgExecutor<'e>, payload: CreateHotelPayload) -> Result<Hotel> {
    sqlx::query_as::<_, Hotel>(
        "
        INSERT INTO hotels (
            id,
            name,
            city,
            country,
            description,
            type,
            price_per_night,
            facilities,
            images,
            owner_id,
            updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.city)
    .bind(payload.country)
    .bind(payload.description)
    .bind(payload.r#type)
    .bind(payload.price_per_night)
    .bind(payload.facilities)
    .bind(Json(payload.images))
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a hotel: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e>(e: impl PgExecutor<'e>, id: String) -> Result<Option<Hotel>> {
    sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch a hotel by id: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_owner_id(
    db: &sqlx::PgPool,
    owner_id: String,
    pagination: Pagination,
) -> Result<Paginated<Hotel>> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM hotels WHERE owner_id = $1")
        .bind(owner_id.clone())
        .fetch_one(db)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count hotels: {}", err);
            Error::UnexpectedError
        })?;

    let hotels = sqlx::query_as::<_, Hotel>(
        "
        SELECT * FROM hotels
        WHERE owner_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        ",
    )
    .bind(owner_id)
    .bind(pagination.per_page as i64)
    .bind((pagination.page.saturating_sub(1) * pagination.per_page) as i64)
    .fetch_all(db)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many hotels: {}", err);
        Error::UnexpectedError
    })?;

    Ok(Paginated::new(
        hotels,
        total as u32,
        pagination.page,
        pagination.per_page,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::FromPrimitive;

    fn hotel_with_images(images: Vec<UploadedMedia>) -> Hotel {
        Hotel {
            id: "01J6KQ0Z3W".to_string(),
            name: "Seafront Palace".to_string(),
            city: "Lagos".to_string(),
            country: "Nigeria".to_string(),
            description: "A hotel by the sea".to_string(),
            r#type: "Beach Resort".to_string(),
            price_per_night: BigDecimal::from_u32(120).unwrap(),
            facilities: vec!["Free WiFi".to_string(), "Parking".to_string()],
            images: Json(images),
            owner_id: "01J6KQ1B8D".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        }
    }

    #[test]
    fn hotel_serializes_images_as_ordered_array() {
        let hotel = hotel_with_images(vec![
            UploadedMedia {
                public_id: "hotels/first".to_string(),
                url: "https://media.test/hotels/first.jpg".to_string(),
                timestamp: 1,
            },
            UploadedMedia {
                public_id: "hotels/second".to_string(),
                url: "https://media.test/hotels/second.jpg".to_string(),
                timestamp: 2,
            },
        ]);

        let value = serde_json::to_value(&hotel).unwrap();

        assert_eq!(value["type"], "Beach Resort");
        assert_eq!(value["images"][0]["url"], "https://media.test/hotels/first.jpg");
        assert_eq!(value["images"][1]["url"], "https://media.test/hotels/second.jpg");
        assert_eq!(value["images"].as_array().unwrap().len(), 2);
    }
}
