use clap::Parser;
use std::path::PathBuf;

/// Backend used when neither the flag nor the environment supplies one.
const DEFAULT_SERVER: &str = "http://localhost:8000";

/// A terminal login client for the BlueGuard access portal
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Backend to authenticate against. Should only be the protocol and
    /// domain, e.g. `https://blueguard.example.com`.
    #[clap(long, env = "BLUEGUARD_BACKEND_URL")]
    server: Option<String>,

    /// Where should we store logs?
    #[clap(long)]
    data_dir: Option<PathBuf>,
}

impl Config {
    /// The backend base URL: the flag, the environment, or the loopback
    /// default, in that order. Resolved once at startup; nothing mutates it
    /// afterwards.
    pub fn server(&self) -> String {
        self.server
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER.to_owned())
    }

    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("com", "blueguard", "blueguard")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn server_falls_back_to_loopback() {
        let config = Config::parse_from(["blueguard"]);

        assert_eq!(config.server(), DEFAULT_SERVER);
    }

    #[test]
    fn server_flag_wins() {
        let config = Config::parse_from(["blueguard", "--server", "https://auth.example.com"]);

        assert_eq!(config.server(), "https://auth.example.com");
    }
}
