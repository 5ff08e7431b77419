use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::convert::Infallible;
use std::future::{ready, Ready};

use crate::modules::pages::application::render_context::{RenderContext, Theme};

pub const THEME_COOKIE: &str = "theme";

impl FromRequest for RenderContext {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let theme = req
            .cookie(THEME_COOKIE)
            .map(|cookie| Theme::from_cookie(cookie.value()))
            .unwrap_or_default();

        ready(Ok(RenderContext { theme }))
    }
}
