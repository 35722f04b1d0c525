use anyhow::{Context, Result};

use crate::env::{which, Environment};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::new()?,
            database: DatabaseConfig::new()?,
            auth: AuthConfig::new()?,
            mail: MailConfig::new()?,
            payment: PaymentConfig::new()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    fn new() -> Result<Self> {
        let port = var_or("PORT", "8080").parse().context("invalid PORT")?;
        let allowed_origins = var_or(
            "ALLOWED_ORIGINS",
            "http://localhost:5173,http://localhost:5174",
        )
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();
        Ok(Self {
            port,
            allowed_origins,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl DatabaseConfig {
    fn new() -> Result<Self> {
        Ok(Self {
            host: var_or("DATABASE_HOST", "localhost"),
            port: var_or("DATABASE_PORT", "5432")
                .parse()
                .context("invalid DATABASE_PORT")?,
            username: var_or("DATABASE_USERNAME", "app"),
            password: var_or("DATABASE_PASSWORD", "passwd"),
            database: var_or("DATABASE_NAME", "app"),
        })
    }
}

/// Cookie の SameSite 属性。api 層で cookie クレートの型へ変換する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieSameSite {
    Strict,
    Lax,
    None,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub token_secret: String,
    pub token_ttl_days: i64,
    pub cookie_secure: bool,
    pub cookie_same_site: CookieSameSite,
}

impl AuthConfig {
    fn new() -> Result<Self> {
        let token_secret = std::env::var("AUTH_TOKEN_SECRET").context("AUTH_TOKEN_SECRET is not set")?;
        let token_ttl_days = var_or("AUTH_TOKEN_TTL_DAYS", "365")
            .parse()
            .context("invalid AUTH_TOKEN_TTL_DAYS")?;
        // 本番はクロスオリジン配信のため SameSite=None + Secure、
        // 開発は Strict かつ非 Secure とする
        let (cookie_secure, cookie_same_site) = match which() {
            Environment::Development => (false, CookieSameSite::Strict),
            Environment::Production => (true, CookieSameSite::None),
        };
        Ok(Self {
            token_secret,
            token_ttl_days,
            cookie_secure,
            cookie_same_site,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

impl MailConfig {
    fn new() -> Result<Self> {
        Ok(Self {
            smtp_host: var_or("SMTP_HOST", "smtp.gmail.com"),
            smtp_port: var_or("SMTP_PORT", "587")
                .parse()
                .context("invalid SMTP_PORT")?,
            username: var_or("SMTP_USERNAME", ""),
            password: var_or("SMTP_PASSWORD", ""),
            from_address: var_or("MAIL_FROM", "StayHub <no-reply@stayhub.example>"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub secret_key: String,
    pub currency: String,
    pub api_base: String,
}

impl PaymentConfig {
    fn new() -> Result<Self> {
        Ok(Self {
            secret_key: std::env::var("STRIPE_SECRET_KEY").context("STRIPE_SECRET_KEY is not set")?,
            currency: var_or("PAYMENT_CURRENCY", "usd"),
            api_base: var_or("STRIPE_API_BASE", "https://api.stripe.com"),
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
