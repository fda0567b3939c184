use festivo_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Admin routes let requests without an api key through when this
    /// is not `Production`
    pub app_env: AppEnv,
    /// Api key the back-office client sends in the `x-api-key` header
    pub admin_api_key: String,
    /// Bearer token the external cron service sends when triggering
    /// the scheduled reminder dispatch
    pub cron_api_key: String,
    /// Endpoint of the transactional mail provider. When this or
    /// `mail_api_key` is unset, outgoing mail is logged and dropped
    pub mail_api_url: Option<String>,
    pub mail_api_key: Option<String>,
    /// Sender address put on every outgoing mail
    pub mail_from: String,
    /// How long a conversation can stay without activity before the
    /// auto-close sweep closes it
    pub conversation_inactivity_millis: i64,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let app_env = match std::env::var("APP_ENV") {
            Ok(env) if env == "production" => AppEnv::Production,
            _ => AppEnv::Development,
        };

        let admin_api_key = match std::env::var("ADMIN_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find ADMIN_API_KEY environment variable. Going to create one.");
                let key = create_random_secret(16);
                info!("Admin api key was generated and set to: {}", key);
                key
            }
        };

        let cron_api_key = match std::env::var("CRON_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find CRON_API_KEY environment variable. Going to create one.");
                let key = create_random_secret(16);
                info!("Cron api key was generated and set to: {}", key);
                key
            }
        };

        let mail_api_url = std::env::var("MAIL_API_URL").ok();
        let mail_api_key = std::env::var("MAIL_API_KEY").ok();
        let mail_from = std::env::var("MAIL_FROM")
            .unwrap_or_else(|_| "Festivo Events <hello@festivo.events>".into());

        let default_inactivity_minutes = "60";
        let inactivity_minutes = std::env::var("CONVERSATION_INACTIVITY_MINUTES")
            .unwrap_or(default_inactivity_minutes.into());
        let inactivity_minutes = match inactivity_minutes.parse::<i64>() {
            Ok(minutes) if minutes > 0 => minutes,
            _ => {
                warn!(
                    "The given CONVERSATION_INACTIVITY_MINUTES: {} is not valid, falling back to the default: {} minutes.",
                    inactivity_minutes, default_inactivity_minutes
                );
                default_inactivity_minutes.parse::<i64>().unwrap()
            }
        };

        Self {
            port,
            app_env,
            admin_api_key,
            cron_api_key,
            mail_api_url,
            mail_api_key,
            mail_from,
            conversation_inactivity_millis: inactivity_minutes * 60 * 1000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
