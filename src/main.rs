use anyhow::Result;
use clap::Parser;
use tui_snake::audio::{AudioSink, Muted, TerminalBell};
use tui_snake::game::{Difficulty, SnakeColor};
use tui_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic snake arcade game for the terminal")]
struct Cli {
    /// Difficulty preselected on the menu
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: Difficulty,

    /// Snake color preselected on the menu
    #[arg(long, value_enum, default_value = "green")]
    color: SnakeColor,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell)
    };

    let mut mode = HumanMode::new(cli.color, cli.difficulty, audio);
    mode.run().await
}
