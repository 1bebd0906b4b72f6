//! Interactive REPL loop: read stdin, run a turn, print the reply, repeat.
//!
//! Used when `-i/--interactive` is passed. The conversation state persists
//! across turns so the agent keeps its thread; on a run error the previous
//! state is kept and the loop continues.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use parley::{Agent, AgentState};

/// True for the commands that end the REPL.
fn is_quit_command(line: &str) -> bool {
    matches!(line.trim(), "quit" | "exit" | "/quit" | "/exit")
}

/// Runs the REPL: prompt, read line, run one turn, print, repeat.
///
/// Exits on EOF (Ctrl+D) or a quit command; empty lines are skipped.
pub async fn run_repl_loop(
    agent: &Agent,
    mut state: Option<AgentState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match reader.next_line().await? {
            None => break,
            Some(s) if s.trim().is_empty() => continue,
            Some(s) if is_quit_command(&s) => break,
            Some(s) => s,
        };

        let result = match &state {
            None => agent.run(&line).await,
            Some(s) => agent.send(s.clone(), &line).await,
        };
        match result {
            Ok(next) => {
                println!("{}", next.last_assistant_reply().unwrap_or_default());
                state = Some(next);
            }
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}
