use clap::Parser;

/// Interactive task list kept in ./taskList.json.
///
/// Takes no options: run it and answer the prompts. Set RUST_LOG for
/// diagnostics on stderr.
#[derive(Parser)]
#[command(name = "tasklist", version, about = "Interactive task list with due dates and urgency markers")]
pub struct Cli {}
