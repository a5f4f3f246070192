//! Command line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use relfetch_fetch::Timeouts;
use relfetch_platform::dir::{cache_dir_in, default_cache_dir};
use relfetch_release::ReleaseEndpoint;
use relfetch_release::data::DEFAULT_API_BASE;

#[derive(Clone, Debug, Parser)]
#[command(name = "relfetch", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Owner of the repository whose latest release is fetched.
    #[arg(long, env = "RELFETCH_OWNER", default_value = "kovidgoyal")]
    pub owner: String,

    /// Repository whose latest release is fetched.
    #[arg(long, env = "RELFETCH_REPO", default_value = "kitty")]
    pub repo: String,

    /// Base URL of the release API.
    #[arg(long, env = "RELFETCH_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Parent of the `<repo>-installer-cache` directory [default: <temp>]
    #[arg(long, env = "RELFETCH_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Connect timeout in seconds.
    #[arg(long, env = "RELFETCH_CONNECT_TIMEOUT", value_name = "SECS", default_value_t = 30)]
    pub connect_timeout: u64,

    /// Read timeout in seconds.
    #[arg(long, env = "RELFETCH_READ_TIMEOUT", value_name = "SECS", default_value_t = 60)]
    pub read_timeout: u64,

    /// Also copy the installer to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Resolved configuration, passed explicitly to the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub endpoint:  ReleaseEndpoint,
    pub cache_dir: PathBuf,
    pub timeouts:  Timeouts,
    pub output:    Option<PathBuf>,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let cache_dir = match &cli.cache_dir {
            Some(parent) => cache_dir_in(parent, &cli.repo),
            None => default_cache_dir(&cli.repo),
        };
        Self {
            endpoint: ReleaseEndpoint::new(cli.owner, cli.repo).api_base(cli.api_base),
            cache_dir,
            timeouts: Timeouts {
                connect: Duration::from_secs(cli.connect_timeout),
                read:    Duration::from_secs(cli.read_timeout),
            },
            output: cli.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "relfetch",
            "--owner",
            "someone",
            "--repo",
            "tool",
            "--api-base",
            "http://127.0.0.1:9000",
            "--cache-dir",
            "/var/cache/tool",
            "--connect-timeout",
            "5",
            "--read-timeout",
            "7",
            "-o",
            "/tmp/tool.txz",
        ])
        .unwrap();
        let settings = Settings::from(cli);

        assert_eq!(
            settings.endpoint.latest_url(),
            "http://127.0.0.1:9000/repos/someone/tool/releases/latest"
        );
        assert_eq!(settings.cache_dir, PathBuf::from("/var/cache/tool/tool-installer-cache"));
        assert_eq!(settings.timeouts.connect, Duration::from_secs(5));
        assert_eq!(settings.timeouts.read, Duration::from_secs(7));
        assert_eq!(settings.output, Some(PathBuf::from("/tmp/tool.txz")));
    }

    #[test]
    fn test_cache_dir_is_always_dedicated_subdir() {
        let cli = Cli::try_parse_from(["relfetch", "--repo", "tool", "--cache-dir", "/home/user"]).unwrap();
        assert_eq!(
            Settings::from(cli).cache_dir,
            PathBuf::from("/home/user/tool-installer-cache")
        );

        let cli = Cli {
            cache_dir: None,
            ..Cli::try_parse_from(["relfetch", "--repo", "tool"]).unwrap()
        };
        assert_eq!(Settings::from(cli).cache_dir, default_cache_dir("tool"));
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["relfetch", "--read-timeout", "soon"]).is_err());
    }
}
