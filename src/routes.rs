//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AppShell;
use crate::pages::{
    Dashboard, Home, Login, NotFound, Profile, SafetyTips, Signup, Sos,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},

        #[route("/sos")]
        Sos {},

        #[route("/dashboard")]
        Dashboard {},

        #[route("/safety-tips")]
        SafetyTips {},

        #[route("/login")]
        Login {},

        #[route("/signup")]
        Signup {},

        #[route("/profile")]
        Profile {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
