//! Stackpkg - OS installer builder for the RedisInsight web bundle.
//!
//! Stages the Node runtime and application assets into a directory tree, then
//! hands the tree to `fpm` to produce deb, rpm, pacman or osxpkg packages.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::package::PackageOptions;
use stackpkg::config::Config;
use stackpkg::layout::Target;

#[derive(Parser)]
#[command(name = "stackpkg")]
#[command(about = "Build OS packages for the RedisInsight web bundle")]
#[command(
    after_help = "QUICK START:\n  stackpkg preflight --osnick bionic              Check inputs and fpm\n  stackpkg build --osnick bionic -f deb -b 1 -d bionic\n  stackpkg show layout --osnick bionic            Print staging paths"
)]
struct Cli {
    /// Project directory holding .env, etc/packages.toml and etc/scripts
    #[arg(long, global = true, default_value = ".")]
    base_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct TargetArgs {
    /// Distribution nickname (e.g. bionic, rhel8, monterey)
    #[arg(long)]
    osnick: String,
    /// Target architecture
    #[arg(long, default_value = "x86_64")]
    arch: String,
    /// OS family
    #[arg(long, default_value = "Linux")]
    osname: String,
}

impl TargetArgs {
    fn target(&self) -> Target {
        Target::new(&self.osnick, &self.arch, &self.osname)
    }
}

#[derive(Args, Clone)]
struct PackageArgs {
    /// Package format: deb, rpm, pacman or osxpkg
    #[arg(short, long, default_value = "deb")]
    format: String,
    /// Build number, used as the package iteration
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    build_number: u32,
    /// Distribution codename or release tag for the file name
    #[arg(short, long, default_value = "bionic")]
    dist: String,
    /// Package this version instead of the one in the metadata file
    #[arg(long)]
    version_override: Option<String>,
    /// Print the fpm invocation as JSON without running fpm.
    /// deb, rpm and pacman still install the service unit into the staging tree.
    #[arg(long)]
    dry_run: bool,
}

impl From<PackageArgs> for PackageOptions {
    fn from(args: PackageArgs) -> Self {
        Self {
            format: args.format,
            build_number: args.build_number,
            distribution: args.dist,
            version_override: args.version_override,
            dry_run: args.dry_run,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create staging directories and run the component preparers
    Stage {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Run fpm over an already staged tree
    Package {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        package: PackageArgs,
    },

    /// Stage, then package
    Build {
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        package: PackageArgs,
    },

    /// Run preflight checks (fpm, metadata, hooks, service units, artifacts)
    Preflight {
        #[command(flatten)]
        target: TargetArgs,
        /// Only check what this format needs
        #[arg(short, long)]
        format: Option<String>,
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show staging paths for a target
    Layout {
        #[command(flatten)]
        target: TargetArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let base_dir = cli.base_dir.canonicalize().unwrap_or(cli.base_dir);

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::load(&base_dir);

    let code = match cli.command {
        Commands::Stage { target } => {
            commands::cmd_stage(&config, &target.target())?;
            0
        }

        Commands::Package { target, package } => {
            commands::cmd_package(&config, &target.target(), &package.into())?
        }

        Commands::Build { target, package } => {
            commands::cmd_build(&config, &target.target(), &package.into())?
        }

        Commands::Preflight {
            target,
            format,
            strict,
        } => {
            commands::cmd_preflight(&config, &target.target(), format.as_deref(), strict)?;
            0
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Layout { target } => {
                    commands::show::ShowTarget::Layout(target.target())
                }
            };
            commands::cmd_show(&config, show_target)?;
            0
        }
    };

    // The packaging tool's exit code is the process exit code
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
