//! Parley CLI binary: one agent, two tools, scripted or interactive turns.
//!
//! With a message argument, runs one turn. With `-i/--interactive`, enters a
//! REPL (after the message turn, when both are given). With neither, plays
//! the built-in scripted turns.

mod repl;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use parley::{Agent, AgentState, ChatOpenAI, TimeTool, ToolRegistry, WeatherTool};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a helpful assistant. Use the get_weather tool for \
weather questions and the get_time tool for time questions; answer anything else directly \
and keep replies to a few sentences.";

/// Turns played by the scripted demo, in order, on one conversation thread.
const SCRIPTED_TURNS: &[&str] = &[
    "What's the weather in Seattle?",
    "What time is it in JST right now?",
    "I'm flying from Paris to Sydney. How's the weather at both ends, and what time is it in AEST?",
    "What's the weather in Atlantis?",
];

#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(about = "Parley — drive a tool-calling agent from the CLI")]
struct Args {
    /// User message (or pass as positional arguments)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Positional args: user message when -m/--message is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Interactive REPL: after output, prompt for input and continue the conversation
    #[arg(short, long)]
    interactive: bool,

    /// Play the built-in scripted turns (also the default when no message is given)
    #[arg(long)]
    scripted: bool,

    /// Model name (default: PARLEY_MODEL env, else gpt-4o-mini)
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Verbose: debug-level logs for LLM and tool calls
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_model(args: &Args) -> String {
    if let Some(ref m) = args.model {
        return m.clone();
    }
    std::env::var("PARLEY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

/// The message from -m/--message, else the joined positional args.
fn resolve_message(args: &Args) -> Option<String> {
    if let Some(ref m) = args.message {
        return Some(m.clone());
    }
    if args.rest.is_empty() {
        None
    } else {
        Some(args.rest.join(" "))
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "parley=debug,cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_agent(model: &str) -> Agent {
    let mut tools = ToolRegistry::new();
    tools.register(Box::new(WeatherTool::new()));
    tools.register(Box::new(TimeTool::new()));
    let tools = Arc::new(tools);
    let llm = Arc::new(ChatOpenAI::new(model).with_tools(tools.list()));
    Agent::new("parley", SYSTEM_PROMPT, llm, tools)
}

/// Plays the scripted turns on one thread, printing each user line and reply.
async fn run_scripted(agent: &Agent) -> Result<(), Box<dyn std::error::Error>> {
    let mut state: Option<AgentState> = None;
    for turn in SCRIPTED_TURNS {
        println!("> {}", turn);
        let next = match state.take() {
            None => agent.run(turn).await?,
            Some(s) => agent.send(s, turn).await?,
        };
        println!("{}\n", next.last_assistant_reply().unwrap_or_default());
        state = Some(next);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    let model = resolve_model(&args);
    let agent = build_agent(&model);
    tracing::debug!(model = %model, "agent ready");

    let message = resolve_message(&args);
    let mut state: Option<AgentState> = None;

    if args.scripted || (message.is_none() && !args.interactive) {
        run_scripted(&agent).await?;
    }

    if let Some(msg) = message {
        let next = agent.run(&msg).await?;
        println!("{}", next.last_assistant_reply().unwrap_or_default());
        state = Some(next);
    }

    if args.interactive {
        repl::run_repl_loop(&agent, state).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("parley").chain(argv.iter().copied()))
    }

    #[test]
    fn message_flag_wins_over_positional() {
        let a = args(&["-m", "flag text", "positional"]);
        assert_eq!(resolve_message(&a).as_deref(), Some("flag text"));
    }

    #[test]
    fn positional_args_are_joined() {
        let a = args(&["what", "time", "is", "it"]);
        assert_eq!(resolve_message(&a).as_deref(), Some("what time is it"));
    }

    #[test]
    fn no_message_means_none() {
        let a = args(&[]);
        assert!(resolve_message(&a).is_none());
        assert!(!a.interactive);
    }

    #[test]
    fn model_flag_overrides_default() {
        let a = args(&["--model", "gpt-4o"]);
        assert_eq!(resolve_model(&a), "gpt-4o");
    }

    #[test]
    fn scripted_turns_cover_known_and_unknown_lookups() {
        assert!(SCRIPTED_TURNS.iter().any(|t| t.contains("Seattle")));
        assert!(SCRIPTED_TURNS.iter().any(|t| t.contains("JST")));
        assert!(SCRIPTED_TURNS.iter().any(|t| t.contains("Atlantis")));
    }
}
