use clap::{command, Parser};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"
MediBot is a single-binary web chat front-end for a hosted LLM completion API. It serves a self-contained chat page and relays each message, wrapped with a fixed medical-assistant preamble, to Groq's OpenAI-compatible chat completions endpoint.

- Stateless: every request is an independent two-turn conversation, nothing is stored.
- Plug-and-play: set GROQ_API_KEY and run; the page is embedded in the binary.
"###
)]
pub struct Args {
    #[command(subcommand)]
    pub subcmd: Option<SubCommands>,
}

#[derive(Parser, Debug)]
pub enum SubCommands {
    Start(StartSubCommand),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Start the MediBot web server", long_about = None)]
pub struct StartSubCommand {}
