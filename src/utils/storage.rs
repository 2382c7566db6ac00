use crate::types::StorageContext;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use ulid::Ulid;

#[derive(Debug)]
pub enum Error {
    UploadFailed,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Serialize, Clone, Debug, Deserialize)]
pub struct UploadedMedia {
    pub public_id: String,
    pub url: String,
    pub timestamp: i64,
}

fn sign_upload_request(timestamp: i64, upload_preset: &str, api_secret: &str) -> String {
    let data_to_sign = format!(
        "timestamp={}&upload_preset={}{}",
        timestamp, upload_preset, api_secret
    );

    let mut hasher = Sha256::new();
    hasher.update(data_to_sign);
    let hash = hasher.finalize();
    base16ct::lower::encode_string(&hash)
}

pub async fn upload_file(cfg: StorageContext, contents: Vec<u8>) -> Result<UploadedMedia, Error> {
    let file_name = Ulid::new().to_string();
    let part = Part::bytes(contents).file_name(file_name);

    let timestamp = chrono::Utc::now().timestamp();
    let signature = sign_upload_request(timestamp, &cfg.upload_preset, &cfg.api_secret);

    let form = Form::new()
        .text("upload_preset", cfg.upload_preset.clone())
        .text("api_key", cfg.api_key.clone())
        .text("timestamp", format!("{}", timestamp))
        .text("signature", signature)
        .text("signature_algorithm", "sha256")
        .part("file", part);

    let res = Client::new()
        .post(cfg.upload_endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to upload a file: {:?}", err);
            Error::UploadFailed
        })?;

    if res.status() != StatusCode::OK {
        let data = res.text().await.map_err(|err| {
            tracing::error!("Error occurred while processing return data: {:?}", err);
            Error::UploadFailed
        })?;

        tracing::error!("Failed to upload file: {}", data);
        return Err(Error::UploadFailed);
    }

    let data = res.text().await.map_err(|err| {
        tracing::error!("Error occurred while processing return data: {:?}", err);
        Error::UploadFailed
    })?;

    match serde_json::de::from_str::<UploadResponse>(data.as_ref()) {
        Ok(res) => Ok(UploadedMedia {
            url: res.secure_url,
            public_id: res.public_id,
            timestamp,
        }),
        Err(err) => {
            tracing::error!("Failed to deserialize cloudinary response: {:?}", err);
            Err(Error::UploadFailed)
        }
    }
}
