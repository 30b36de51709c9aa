//! Backend endpoint table
//!
//! Paths are backend-defined and centralized here so a deployment against a
//! differently-routed backend only touches this module.

pub fn alerts_list() -> String {
    "/emergency/alerts/".to_string()
}

pub fn alert_create() -> String {
    "/emergency/alert/".to_string()
}

pub fn alert_detail(id: i64) -> String {
    format!("/emergency/alerts/{id}/")
}

pub fn login() -> String {
    "/auth/login/".to_string()
}

pub fn register() -> String {
    "/register/".to_string()
}

pub fn request_otp() -> String {
    "/auth/request-otp/".to_string()
}

pub fn verify_otp() -> String {
    "/auth/verify-otp/".to_string()
}

pub fn logout() -> String {
    "/api/auth/logout/".to_string()
}

pub fn current_user() -> String {
    "/api/auth/user/".to_string()
}

pub fn profile_me() -> String {
    "/profile/me/".to_string()
}
