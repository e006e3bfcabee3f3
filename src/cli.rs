//! CLI: args, schema mapping, and run logic.

use std::path::PathBuf;

use crate::config::WorkspaceConfig;
use crate::generator::{
    normalize_options, E2eTestRunner, Linter, NormalizedOptions, Schema, UnitTestRunner,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "rn-appgen")]
#[command(about = "Normalize React Native application generator options and print them as JSON.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Application name; `dir/name` places the app under `dir`
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Directory (under the apps root) where the app is placed
    #[arg(long, value_name = "DIR")]
    pub directory: Option<String>,

    /// Human-readable app title (default: the PascalCase class name)
    #[arg(long, value_name = "NAME")]
    pub display_name: Option<String>,

    /// Lint tool for the generated project
    #[arg(long, value_enum)]
    pub linter: Option<Linter>,

    /// End-to-end test runner
    #[arg(long, value_enum, default_value = "none")]
    pub e2e_test_runner: E2eTestRunner,

    /// Unit test runner (default: jest)
    #[arg(long, value_enum)]
    pub unit_test_runner: Option<UnitTestRunner>,

    /// Install packages after generation
    #[arg(long)]
    pub install: bool,

    /// Comma-separated project tags
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Apps root relative to the workspace root; overrides the config file
    #[arg(long, value_name = "DIR")]
    pub apps_dir: Option<String>,

    /// Workspace config file (default: ./rn-appgen.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,

    /// Print an example config file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Verbose: -v = info logs, -vv = debug logs
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Map CLI flags 1:1 onto the generator schema.
    pub fn schema(&self, name: &str) -> Schema {
        Schema {
            name: name.to_string(),
            directory: self.directory.clone(),
            display_name: self.display_name.clone(),
            linter: self.linter,
            e2e_test_runner: self.e2e_test_runner,
            unit_test_runner: self.unit_test_runner,
            install: self.install,
            tags: self.tags.clone(),
        }
    }
}

fn load_config(args: &Args) -> anyhow::Result<WorkspaceConfig> {
    let mut config = match args.config {
        Some(ref path) => WorkspaceConfig::load(path)?,
        None => WorkspaceConfig::load_default(std::env::current_dir()?)?,
    };
    if let Some(ref apps_dir) = args.apps_dir {
        config.workspace_layout.apps_dir = apps_dir.clone();
    }
    Ok(config)
}

fn render(options: &NormalizedOptions, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(options)
    } else {
        serde_json::to_string_pretty(options)
    }
}

fn print_example_config() -> i32 {
    match WorkspaceConfig::example() {
        Ok(example) => {
            print!("{}", example);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    }
}

pub fn run(args: Args) -> i32 {
    if args.print_config {
        return print_example_config();
    }

    let Some(ref name) = args.name else {
        eprintln!("Error: missing application name");
        return 2;
    };

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return 2;
        }
    };
    tracing::info!("Apps root: {}", config.workspace_layout.apps_dir);

    let schema = args.schema(name);
    let options = match normalize_options(&config.workspace_layout, &schema) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match render(&options, args.compact) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize options: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_maps_flags() {
        let args = Args::parse_from([
            "rn-appgen",
            "my-app",
            "--directory",
            "mobile",
            "--linter",
            "eslint",
            "--e2e-test-runner",
            "detox",
            "--install",
        ]);
        let schema = args.schema("my-app");
        assert_eq!(schema.directory.as_deref(), Some("mobile"));
        assert_eq!(schema.linter, Some(Linter::EsLint));
        assert_eq!(schema.e2e_test_runner, E2eTestRunner::Detox);
        assert_eq!(schema.unit_test_runner, None);
        assert!(schema.install);
    }

    #[test]
    fn render_compact_and_pretty() {
        let layout = crate::config::WorkspaceLayout::default();
        let options = normalize_options(&layout, &Schema::new("my-app")).unwrap();

        let compact = render(&options, true).unwrap();
        assert_eq!(compact.lines().count(), 1);
        assert!(compact.contains(r#""appProjectRoot":"apps/my-app""#));

        let pretty = render(&options, false).unwrap();
        assert!(pretty.lines().count() > 1);

        let from_compact: NormalizedOptions = serde_json::from_str(&compact).unwrap();
        let from_pretty: NormalizedOptions = serde_json::from_str(&pretty).unwrap();
        assert_eq!(from_compact, options);
        assert_eq!(from_pretty, options);
    }

    #[test]
    fn e2e_runner_defaults_to_none() {
        let args = Args::parse_from(["rn-appgen", "my-app"]);
        assert_eq!(args.e2e_test_runner, E2eTestRunner::None);
        assert!(!args.install);
    }
}
