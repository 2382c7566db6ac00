pub mod request {
    use async_trait::async_trait;
    use axum::extract::multipart::Field;
    use axum_typed_multipart::{FieldData, TryFromField, TryFromMultipart, TypedMultipartError};
    use bigdecimal::{BigDecimal, FromPrimitive};
    use bytes::Bytes;
    use validator::Validate;

    #[derive(Debug, Clone)]
    pub struct Price(pub BigDecimal);

    pub fn parse_price(text: &str) -> Option<Price> {
        text.parse::<f32>()
            .ok()
            .filter(|price| *price >= 0.0)
            .and_then(BigDecimal::from_f32)
            .map(Price)
    }

    #[async_trait]
    impl TryFromField for Price {
        async fn try_from_field<'a>(
            field: Field<'a>,
            _: Option<usize>,
        ) -> Result<Self, TypedMultipartError> {
            let field_name = field.name().unwrap_or("price_per_night").to_string();

            let text = field.text().await.map_err(|err| {
                tracing::error!("Error occurred while parsing body: {}", err);
                TypedMultipartError::InvalidRequestBody { source: err }
            })?;

            parse_price(&text).ok_or(TypedMultipartError::UnknownField { field_name })
        }
    }

    #[derive(TryFromMultipart, Validate)]
    pub struct Body {
        #[validate(length(min = 1, message = "Name is required"))]
        pub name: String,
        #[validate(length(min = 1, message = "City is required"))]
        pub city: String,
        #[validate(length(min = 1, message = "Country is required"))]
        pub country: String,
        #[validate(length(min = 1, message = "Description is required"))]
        pub description: String,
        #[form_data(field_name = "type")]
        #[validate(length(min = 1, message = "Type is required"))]
        pub type_: String,
        pub price_per_night: Price,
        #[validate(length(min = 1, message = "At least one facility is required"))]
        pub facilities: Vec<String>,
        #[form_data(limit = "5MiB")]
        pub images: Vec<FieldData<Bytes>>,
    }
}

pub mod response {
    use crate::modules::hotel::repository::Hotel;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        HotelCreated(Hotel),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::HotelCreated(hotel) => {
                    (StatusCode::CREATED, Json(json!(hotel))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        TooManyImages,
        FailedToCreateHotel,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
                }
                Self::TooManyImages => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "A maximum of 6 images can be uploaded" })),
                )
                    .into_response(),
                Self::FailedToCreateHotel => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create hotel" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::request::{self, parse_price, Price};
    use super::response;
    use crate::modules::hotel::repository::Hotel;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use bigdecimal::{BigDecimal, FromPrimitive};
    use sqlx::types::Json;
    use validator::Validate;

    fn body_with_name(name: &str) -> request::Body {
        request::Body {
            name: name.to_string(),
            city: "Lagos".to_string(),
            country: "Nigeria".to_string(),
            description: "A hotel by the sea".to_string(),
            type_: "Beach Resort".to_string(),
            price_per_night: Price(BigDecimal::from_u32(120).unwrap()),
            facilities: vec!["Free WiFi".to_string()],
            images: vec![],
        }
    }

    #[test]
    fn price_parses_from_decimal_text() {
        let price = parse_price("120.5").unwrap();
        assert_eq!(price.0, BigDecimal::from_f32(120.5).unwrap());
    }

    #[test]
    fn price_rejects_non_numeric_text() {
        assert!(parse_price("a night's rest").is_none());
    }

    #[test]
    fn price_rejects_negative_amounts() {
        assert!(parse_price("-10").is_none());
    }

    #[test]
    fn empty_required_field_fails_validation() {
        let errors = body_with_name("").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn complete_body_passes_validation() {
        assert!(body_with_name("Seafront Palace").validate().is_ok());
    }

    #[test]
    fn created_hotel_maps_to_created() {
        let hotel = Hotel {
            id: "01J6KQ0Z3W".to_string(),
            name: "Seafront Palace".to_string(),
            city: "Lagos".to_string(),
            country: "Nigeria".to_string(),
            description: "A hotel by the sea".to_string(),
            r#type: "Beach Resort".to_string(),
            price_per_night: BigDecimal::from_u32(120).unwrap(),
            facilities: vec!["Free WiFi".to_string()],
            images: Json(vec![]),
            owner_id: "01J6KQ1B8D".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };

        let res = response::Success::HotelCreated(hotel).into_response();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    #[test]
    fn validation_failure_maps_to_bad_request() {
        let res =
            response::Error::FailedToValidate(validator::ValidationErrors::new()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn too_many_images_maps_to_bad_request() {
        let res = response::Error::TooManyImages.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn generic_failure_maps_to_internal_server_error() {
        let res = response::Error::FailedToCreateHotel.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
