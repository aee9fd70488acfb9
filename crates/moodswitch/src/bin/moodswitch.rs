//! Terminal demo: render the mood panel, optionally re-rendering on every
//! mood read from stdin.

use std::io::{self, BufRead};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use moodswitch::{
    render_view, Animation, AnimationKind, MoodId, OutputMode, RenderOptions, SelectionStore,
};

#[derive(Debug, Parser)]
#[command(name = "moodswitch", version, about = "Pick a mood and see its themed panel")]
struct Cli {
    /// Mood to start on (happy, calm, energetic, melancholic)
    #[arg(long, default_value = "calm")]
    mood: MoodId,

    /// Output mode: auto, term, text, or json
    #[arg(long, default_value = "auto")]
    output: OutputMode,

    /// Width of the panel in columns
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Animation time to render, in milliseconds
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Read mood names from stdin, one per line, re-rendering after each
    #[arg(long)]
    watch: bool,

    /// Print the @keyframes rules for every animation and exit
    #[arg(long)]
    keyframes: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.keyframes {
        let rules: Vec<String> = [
            AnimationKind::Bounce,
            AnimationKind::Pulse,
            AnimationKind::SlowFade,
        ]
        .into_iter()
        .filter_map(Animation::for_kind)
        .map(|animation| animation.keyframes_css())
        .collect();
        println!("{}", rules.join("\n\n"));
        return Ok(());
    }

    let store = SelectionStore::builder().initial_mood(cli.mood).build();
    let options = RenderOptions {
        mode: cli.output,
        width: cli.width,
        elapsed: Duration::from_millis(cli.at_ms),
    };
    println!("{}", render_view(&store, &options)?);

    if !cli.watch {
        return Ok(());
    }

    store.subscribe(move |store, _change| match render_view(store, &options) {
        Ok(view) => println!("\n{}", view),
        Err(err) => error!(%err, "failed to render view"),
    });

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read mood from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(err) = store.select_key(&line) {
            eprintln!("{}", err);
        }
    }
    Ok(())
}
