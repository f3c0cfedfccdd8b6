//! Command-line argument definitions.

use crate::config::RunConfig;
use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser};
use loggen_resources::ResourceConfig;
use std::ffi::OsString;
use std::path::PathBuf;

/// Flags that may also be spelled with a single dash (`-count=5`).
const LEGACY_FLAGS: [&str; 4] = ["ext", "prefix", "count", "help"];

const AFTER_HELP: &str = "\
Example prefix usage: --prefix=FAKE_LOG

Example command: loggen -ext=txt -prefix=data-log -count=250";

#[derive(Parser, Clone, Debug)]
#[command(name = "loggen")]
#[command(about = "Loggen creates mock log files.")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Generated log file's extension. A leading dot is added if missing
    #[arg(
        long,
        default_value = ".log",
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub ext: String,

    /// Generated log file's prefix, what comes before the timestamp. A
    /// trailing '-' is added unless it already ends with '-' or '_'
    #[arg(long, default_value = "loggen-", allow_hyphen_values = true)]
    pub prefix: String,

    /// The number of log lines to generate
    #[arg(long, default_value = "100")]
    pub count: u64,

    #[command(flatten)]
    pub resources: ResourceOpts,

    /// Directory the log file is written to
    #[arg(long, default_value = ".", env = "LOGGEN_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Random seed for reproducible output (same seed = same lines)
    #[arg(long, env = "LOGGEN_SEED")]
    pub seed: Option<u64>,

    /// Do not print the written file to stdout
    #[arg(long)]
    pub no_echo: bool,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.ext, &self.prefix, self.count)
    }
}

/// Where to find the resource files.
#[derive(Args, Clone, Debug)]
pub struct ResourceOpts {
    /// Directory containing class-names.csv, method-names.csv and messages.txt
    /// [default: resources]
    #[arg(long, env = "LOGGEN_RESOURCES_DIR")]
    pub resources_dir: Option<PathBuf>,

    /// YAML file overriding the resource directory and file names
    #[arg(long, value_name = "PATH", env = "LOGGEN_RESOURCES_CONFIG")]
    pub resources_config: Option<PathBuf>,
}

impl ResourceOpts {
    /// Resolve the resource locations; `--resources-dir` wins over the
    /// directory named in the config file.
    pub fn resource_config(&self) -> anyhow::Result<ResourceConfig> {
        let config = match &self.resources_config {
            Some(path) => ResourceConfig::from_file(path)
                .with_context(|| format!("Failed to load resource config from {path:?}"))?,
            None => ResourceConfig::default(),
        };

        Ok(match &self.resources_dir {
            Some(dir) => config.with_dir(dir),
            None => config,
        })
    }
}

/// Rewrite single-dash long flags (`-ext=txt`, `-help`) to the double-dash
/// form clap expects. Arguments after `--` are left alone.
pub fn rewrite_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut rewritten = Vec::new();
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            rewritten.push(arg);
            continue;
        }
        if arg.to_str() == Some("--") {
            passthrough = true;
            rewritten.push(arg);
            continue;
        }

        let legacy = arg.to_str().and_then(|s| {
            let flag = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            LEGACY_FLAGS.contains(&name).then(|| OsString::from(format!("-{s}")))
        });
        rewritten.push(legacy.unwrap_or(arg));
    }

    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(rewrite_legacy_flags(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["loggen"]).unwrap();

        assert_eq!(cli.ext, ".log");
        assert_eq!(cli.prefix, "loggen-");
        assert_eq!(cli.count, 100);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.no_echo);
    }

    #[test]
    fn test_legacy_single_dash_flags() {
        let cli = parse(&["loggen", "-ext=txt", "-prefix=data-log", "-count=250"]).unwrap();

        let config = cli.run_config();
        assert_eq!(config.extension, ".txt");
        assert_eq!(config.prefix, "data-log-");
        assert_eq!(config.count, 250);
    }

    #[test]
    fn test_legacy_flag_with_separate_value() {
        let cli = parse(&["loggen", "-count", "7"]).unwrap();
        assert_eq!(cli.count, 7);
    }

    #[test]
    fn test_hyphen_leading_values() {
        let cli = parse(&["loggen", "-prefix", "-x", "-ext", "-old"]).unwrap();
        assert_eq!(cli.prefix, "-x");
        assert_eq!(cli.run_config().prefix, "-x-");
        assert_eq!(cli.run_config().extension, ".-old");
    }

    #[test]
    fn test_double_dash_flags() {
        let cli = parse(&["loggen", "--ext", "json", "--seed", "42", "--no-echo"]).unwrap();
        assert_eq!(cli.run_config().extension, ".json");
        assert_eq!(cli.seed, Some(42));
        assert!(cli.no_echo);
    }

    #[test]
    fn test_help_flag() {
        for flag in ["-help", "--help", "-h"] {
            let err = parse(&["loggen", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert!(err.to_string().contains("Loggen creates mock log files."));
        }
    }

    #[test]
    fn test_empty_extension_rejected() {
        assert!(parse(&["loggen", "-ext="]).is_err());
    }

    #[test]
    fn test_negative_count_rejected() {
        assert!(parse(&["loggen", "--count=-1"]).is_err());
    }

    #[test]
    fn test_rewrite_leaves_other_args_alone() {
        let rewritten = rewrite_legacy_flags(["loggen", "-h", "--ext=txt", "-x", "--", "-count"]);
        let expected: Vec<OsString> = ["loggen", "-h", "--ext=txt", "-x", "--", "-count"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(rewritten, expected);
    }

    #[test]
    fn test_rewrite_legacy_names() {
        let rewritten = rewrite_legacy_flags(["loggen", "-help", "-prefix=FAKE_LOG"]);
        assert_eq!(rewritten[1], OsString::from("--help"));
        assert_eq!(rewritten[2], OsString::from("--prefix=FAKE_LOG"));
    }

    #[test]
    fn test_resource_config_default_dir() {
        let opts = ResourceOpts {
            resources_dir: None,
            resources_config: None,
        };
        let config = opts.resource_config().unwrap();
        assert_eq!(config, ResourceConfig::default());
    }

    #[test]
    fn test_resources_dir_overrides_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("resources.yaml");
        std::fs::write(&config_path, "dir: from-file\nmessages: short.txt\n").unwrap();

        let opts = ResourceOpts {
            resources_dir: Some(PathBuf::from("from-flag")),
            resources_config: Some(config_path),
        };
        let config = opts.resource_config().unwrap();

        assert_eq!(config.dir, PathBuf::from("from-flag"));
        assert_eq!(config.messages, "short.txt");
    }
}
