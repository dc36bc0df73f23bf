use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

use crate::bootstrap::env::EnvSource;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_FILTER: &str = "plantbot_api=debug,axum=info,tower_http=info";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub is_production: bool,
    pub log_filter: String,
    pub bot_name: String,
    pub knowledge_path: Option<PathBuf>,
    pub max_message_chars: usize,
    pub body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            debug: false,
            is_production: false,
            log_filter: DEFAULT_LOG_FILTER.into(),
            bot_name: "Plant Bot".into(),
            knowledge_path: None,
            max_message_chars: 500,
            body_limit_bytes: 64 * 1024,
        }
    }
}

impl Config {
    pub fn from_source(src: &EnvSource) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = parse_or(src, "APP_HOST", defaults.host)?;
        // APP_PORT wins; PORT is honoured for platforms that inject it
        let port = match src.get_trimmed("APP_PORT") {
            Some(_) => parse_or(src, "APP_PORT", defaults.port)?,
            None => parse_or(src, "PORT", defaults.port)?,
        };
        let debug = match src.get("APP_DEBUG") {
            Some(raw) => parse_flag(raw).with_context(|| format!("invalid APP_DEBUG={raw:?}"))?,
            None => defaults.debug,
        };
        let is_production = matches!(
            src.get_trimmed("RUST_ENV"),
            Some("production") | Some("prod")
        );
        let log_filter = src
            .get_trimmed("RUST_LOG")
            .map(str::to_string)
            .unwrap_or(defaults.log_filter);
        let bot_name = src
            .get_trimmed("BOT_NAME")
            .map(str::to_string)
            .unwrap_or(defaults.bot_name);
        let knowledge_path = src.get_trimmed("PLANTBOT_KNOWLEDGE").map(PathBuf::from);
        let max_message_chars = parse_or(src, "CHAT_MAX_CHARS", defaults.max_message_chars)?;
        if max_message_chars == 0 {
            anyhow::bail!("CHAT_MAX_CHARS must be greater than zero");
        }
        let body_limit_bytes = parse_or(src, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?;

        if is_production && debug {
            anyhow::bail!("APP_DEBUG must not be enabled when RUST_ENV is production");
        }

        Ok(Self {
            host,
            port,
            debug,
            is_production,
            log_filter,
            bot_name,
            knowledge_path,
            max_message_chars,
            body_limit_bytes,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(src: &EnvSource, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match src.get_trimmed(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {key}={raw:?}")),
        None => Ok(default),
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        Config::from_source(&EnvSource::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn defaults_listen_on_all_interfaces_port_5000_without_debug() {
        let c = cfg(&[]).unwrap();
        assert_eq!(c.socket_addr().to_string(), "0.0.0.0:5000");
        assert!(!c.debug);
        assert!(!c.is_production);
        assert_eq!(c.log_filter, DEFAULT_LOG_FILTER);
        assert!(c.knowledge_path.is_none());
    }

    #[test]
    fn app_port_takes_precedence_over_port() {
        assert_eq!(cfg(&[("PORT", "8080")]).unwrap().port, 8080);
        assert_eq!(
            cfg(&[("PORT", "8080"), ("APP_PORT", "9090")]).unwrap().port,
            9090
        );
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let err = cfg(&[("APP_PORT", "fifty")]).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));

        let err = cfg(&[("APP_HOST", "not-an-ip")]).unwrap_err();
        assert!(err.to_string().contains("APP_HOST"));

        let err = cfg(&[("APP_DEBUG", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("APP_DEBUG"));
    }

    #[test]
    fn debug_flag_accepts_common_spellings() {
        for raw in ["1", "true", "YES", "On"] {
            assert!(cfg(&[("APP_DEBUG", raw)]).unwrap().debug, "{raw}");
        }
        for raw in ["0", "false", "no", "OFF", ""] {
            assert!(!cfg(&[("APP_DEBUG", raw)]).unwrap().debug, "{raw}");
        }
    }

    #[test]
    fn debug_is_refused_in_production() {
        let err = cfg(&[("RUST_ENV", "production"), ("APP_DEBUG", "true")]).unwrap_err();
        assert!(err.to_string().contains("APP_DEBUG"));
        assert!(cfg(&[("RUST_ENV", "prod")]).unwrap().is_production);
    }

    #[test]
    fn zero_message_limit_is_rejected() {
        assert!(cfg(&[("CHAT_MAX_CHARS", "0")]).is_err());
        assert_eq!(
            cfg(&[("CHAT_MAX_CHARS", "42")]).unwrap().max_message_chars,
            42
        );
    }

    #[test]
    fn blank_knowledge_path_is_unset() {
        assert!(cfg(&[("PLANTBOT_KNOWLEDGE", " ")]).unwrap().knowledge_path.is_none());
        assert_eq!(
            cfg(&[("PLANTBOT_KNOWLEDGE", "plants.json")])
                .unwrap()
                .knowledge_path,
            Some(PathBuf::from("plants.json"))
        );
    }
}
