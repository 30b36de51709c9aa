//! Auth and profile transport
//!
//! Token persistence is the session store's job; these functions only move
//! bytes. Profile updates go out as multipart so an image can ride along.

use serde::Serialize;

use super::client::{ApiClient, ApiError};
use super::endpoints;
use crate::types::{
    CurrentUserResponse, LoginResponse, MessageResponse, ProfileResponse, VerifyOtpResponse,
};

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

/// Profile update; `None` fields are omitted from the request entirely.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub blood_group: Option<String>,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[derive(Serialize)]
    struct Body<'a> {
        username: &'a str,
        password: &'a str,
    }

    ApiClient::new()
        .post_json(&endpoints::login(), &Body { username, password })
        .await
}

pub async fn register(request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
    ApiClient::new()
        .post_json(&endpoints::register(), request)
        .await
}

pub async fn request_otp(email: &str) -> Result<MessageResponse, ApiError> {
    #[derive(Serialize)]
    struct Body<'a> {
        email: &'a str,
    }

    ApiClient::new()
        .post_json(&endpoints::request_otp(), &Body { email })
        .await
}

pub async fn verify_otp(email: &str, otp: &str) -> Result<VerifyOtpResponse, ApiError> {
    #[derive(Serialize)]
    struct Body<'a> {
        email: &'a str,
        otp: &'a str,
    }

    ApiClient::new()
        .post_json(&endpoints::verify_otp(), &Body { email, otp })
        .await
}

pub async fn logout() -> Result<(), ApiError> {
    ApiClient::new().post_empty(&endpoints::logout()).await
}

pub async fn current_user() -> Result<CurrentUserResponse, ApiError> {
    ApiClient::new().get_json(&endpoints::current_user()).await
}

pub async fn fetch_profile() -> Result<ProfileResponse, ApiError> {
    ApiClient::new().get_json(&endpoints::profile_me()).await
}

pub async fn update_profile(update: ProfileUpdate) -> Result<ProfileResponse, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    if let Some(full_name) = update.full_name {
        form = form.text("full_name", full_name);
    }
    if let Some(phone) = update.phone {
        form = form.text("phone", phone);
    }
    if let Some(name) = update.emergency_contact_name {
        form = form.text("emergency_contact_name", name);
    }
    if let Some(phone) = update.emergency_contact_phone {
        form = form.text("emergency_contact_phone", phone);
    }
    if let Some(blood_group) = update.blood_group {
        form = form.text("blood_group", blood_group);
    }
    if let Some(image) = update.image {
        let part = reqwest::multipart::Part::bytes(image.bytes).file_name(image.file_name);
        form = form.part("image", part);
    }

    ApiClient::new()
        .patch_multipart(&endpoints::profile_me(), form)
        .await
}
