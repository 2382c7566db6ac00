pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::hotel::repository::Hotel;

    pub enum Success {
        Hotel(Hotel),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Hotel(hotel) => (StatusCode::OK, Json(json!(hotel))).into_response(),
            }
        }
    }

    pub enum Error {
        HotelNotFound,
        FailedToFetchHotel,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::HotelNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Hotel not found" })),
                )
                    .into_response(),
                Self::FailedToFetchHotel => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch hotel" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::response;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn missing_hotel_maps_to_not_found() {
        let res = response::Error::HotelNotFound.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
