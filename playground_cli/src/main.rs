//! Playground host binary

use anyhow::Context;
use clap::Parser;
use playground_cli::{logging, Cli, InputScript, PlaygroundRuntime};
use services_playground::EditorSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let text = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let script = InputScript::from_text(&text)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    let session = EditorSession::new(cli.playground_config()?, cli.file_tree()?);
    let mut runtime = PlaygroundRuntime::new(session, cli.adapter(), cli.runtime_config())
        .context("Failed to start session host")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime.run(script, &mut out).await?;

    Ok(())
}
