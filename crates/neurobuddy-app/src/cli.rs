use clap::Parser;

/// NeuroBuddy: terminal chat assistant for cranial nerve anatomy.
#[derive(Parser, Debug)]
#[command(name = "neurobuddy", version, about)]
pub struct Args {
    /// Ask a single question and exit after the answer.
    #[arg(short = 'a', long)]
    pub ask: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write the conversation as an HTML transcript to this path on exit.
    #[arg(short = 't', long)]
    pub transcript: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
