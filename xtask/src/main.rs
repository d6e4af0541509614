use std::path::PathBuf;

use clap::Parser;
use xshell::cmd;

#[derive(Debug, clap::Args)]
struct BuildArgs {
    #[arg(long, short)]
    release: bool,
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    #[command(flatten)]
    build_args: BuildArgs,

    /// Server configuration used for local runs
    #[arg(long, short, default_value = "juststream-server/config.toml")]
    config: PathBuf,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    Build(BuildArgs),
    Run(RunArgs),
    /// Runs the natively testable crates
    Test,
}

#[derive(Debug, clap::Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn build(args: &BuildArgs) -> anyhow::Result<()> {
    let release = args.release.then_some("--release");

    // The server embeds the site bundle, so trunk runs first
    let shell = xshell::Shell::new()?;
    {
        let _dir = shell.push_dir("juststream-site");
        cmd!(shell, "trunk build {release...}").run()?;
    }

    cmd!(shell, "cargo build {release...} --package juststream-server").run()?;

    Ok(())
}

fn run(args: &RunArgs) -> anyhow::Result<()> {
    build(&args.build_args)?;

    let release = args.build_args.release.then_some("--release");
    let config = &args.config;
    let shell = xshell::Shell::new()?;
    cmd!(
        shell,
        "cargo run {release...} --bin juststream-server -- --config {config}"
    )
    .run()?;

    Ok(())
}

fn test() -> anyhow::Result<()> {
    let shell = xshell::Shell::new()?;
    cmd!(
        shell,
        "cargo test --package juststream-api --package juststream-catalog --package juststream-server"
    )
    .run()?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match &args.command {
        Command::Build(args) => build(args)?,
        Command::Run(args) => run(args)?,
        Command::Test => test()?,
    }

    Ok(())
}
