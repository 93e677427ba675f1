use super::{start, status, stop};
use clap::{ArgAction, Parser, Subcommand};

const VERSION_INFO: &str = env!("AMICTL_BUILD_VERSION");

#[derive(Parser, Debug)]
#[command(name = "amictl")]
#[command(about = "Manage EC2 instances of a fixed machine image", long_about = None, version = VERSION_INFO)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Name of the AWS credential profile
    #[arg(short = 'p', long = "profile", default_value = "default", global = true)]
    pub profile: String,

    /// Name of the AWS region to operate in
    #[arg(short = 'r', long = "region", default_value = "us-east-1", global = true)]
    pub region: String,

    /// Increase message verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch a new instance of the managed image
    Start(start::Start),

    /// Show all instances of the managed image
    Status(status::Status),

    /// Terminate a running instance
    Stop(stop::Stop),
}
