use strum::EnumString;

/// 実行環境を表す。ENV が未設定の場合はビルドプロファイルから推定する。
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[cfg_attr(debug_assertions, default)]
    Development,
    #[cfg_attr(not(debug_assertions), default)]
    Production,
}

pub fn which() -> Environment {
    match std::env::var("ENV") {
        Ok(v) => v.parse().unwrap_or_default(),
        Err(_) => Environment::default(),
    }
}
