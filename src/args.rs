use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name="Basescape", about = "Tech tree search and monthly costs reports over mod data", author, version, long_about = None)]
pub struct AppArgs {
    #[clap(long, short = 'm', action=ArgAction::Set, help = "Path to the mod ruleset json")]
    pub ruleset: PathBuf,
    #[clap(long, short = 'p', action=ArgAction::Set, help = "Path to the campaign tech progress json")]
    pub progress: Option<PathBuf>,
    #[clap(long, short = 'q', action=ArgAction::Set, default_value = "", help = "Topic search query")]
    pub query: String,
    #[clap(long, short = 's', action=ArgAction::Set, help = "Resolve a result row to its topic and category")]
    pub select: Option<usize>,
    #[clap(long, short = 'b', action=ArgAction::Set, help = "Path to a base ledger json; prints the monthly costs report")]
    pub ledger: Option<PathBuf>,
}
