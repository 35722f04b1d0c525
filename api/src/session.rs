use axum::http::{header, HeaderMap};
use cookie::{Cookie, SameSite};
use shared::config::{AuthConfig, CookieSameSite};

/// セッショントークンを運ぶ Cookie の名前。
pub const SESSION_COOKIE_NAME: &str = "token";

fn same_site(cfg: &AuthConfig) -> SameSite {
    match cfg.cookie_same_site {
        CookieSameSite::Strict => SameSite::Strict,
        CookieSameSite::Lax => SameSite::Lax,
        CookieSameSite::None => SameSite::None,
    }
}

pub fn session_cookie(cfg: &AuthConfig, token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .http_only(true)
        .secure(cfg.cookie_secure)
        .same_site(same_site(cfg))
        .path("/")
        .build()
}

/// ログアウト用。値を空にし、即時失効させる。
pub fn expired_session_cookie(cfg: &AuthConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(cfg, String::new());
    cookie.set_max_age(cookie::time::Duration::ZERO);
    cookie
}

pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    Cookie::split_parse(raw.to_owned())
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn auth_config(secure: bool, same_site: CookieSameSite) -> AuthConfig {
        AuthConfig {
            token_secret: "test-secret".into(),
            token_ttl_days: 365,
            cookie_secure: secure,
            cookie_same_site: same_site,
        }
    }

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = session_cookie(&auth_config(true, CookieSameSite::None), "abc".into());
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn development_cookie_is_strict_and_not_secure() {
        let cookie = session_cookie(&auth_config(false, CookieSameSite::Strict), "abc".into());
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn expired_cookie_has_zero_max_age() {
        let cookie = expired_session_cookie(&auth_config(false, CookieSameSite::Strict));
        assert_eq!(cookie.max_age(), Some(cookie::time::Duration::ZERO));
        assert!(cookie.value().is_empty());
    }

    #[test]
    fn session_token_reads_the_token_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("other=1; token=abc.def.ghi; theme=dark"),
        );
        assert_eq!(session_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn session_token_is_none_without_cookie_header() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }
}
