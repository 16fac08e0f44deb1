use clap::Parser;
use colored::*;
use furiyomi::api::{CmdMessage, ConfigAction, MessageLevel};
use furiyomi::commands::CmdResult;
use furiyomi::error::Result;
use furiyomi::init::{initialize, FuriContext};
use furiyomi::logging::init_logging;
use std::io::Read;

mod args;
use args::{CardsCommands, Cli, Commands, QueueCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut ctx = initialize()?;

    match cli.command {
        Commands::Highlight { files } => handle_highlight(&mut ctx, files),
        Commands::Furigana { text } => handle_furigana(&mut ctx, text),
        Commands::Mark { line } => print_result(ctx.api.mark(&line)?),
        Commands::Unmark { line } => print_result(ctx.api.unmark(&line)?),
        Commands::Queue(cmd) => handle_queue(&mut ctx, cmd),
        Commands::Cards(CardsCommands::Import { file }) => {
            print_result(ctx.api.import_cards(&file)?)
        }
        Commands::Kanji { ksdata, all_cards } => {
            print_result(ctx.api.kanji(&ksdata, all_cards.as_deref())?)
        }
        Commands::Stats => print_result(ctx.api.stats()?),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Paths => print_result(ctx.api.file_paths()?),
    }
}

fn handle_highlight(ctx: &mut FuriContext, files: Vec<std::path::PathBuf>) -> Result<()> {
    // escapes are dropped when colors are disabled
    let fmt = "{}".red().to_string();
    print_result(ctx.api.highlight(&files, &fmt)?)
}

fn handle_furigana(ctx: &mut FuriContext, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    print_result(ctx.api.furigana(&text)?)
}

fn handle_queue(ctx: &mut FuriContext, cmd: QueueCommands) -> Result<()> {
    let result = match cmd {
        QueueCommands::Count => ctx.api.queue_count()?,
        QueueCommands::Take => ctx.api.queue_take()?,
        QueueCommands::Add { line } => ctx.api.queue_add(&line)?,
        QueueCommands::Remove { line } => ctx.api.queue_remove(&line)?,
    };
    print_result(result)
}

fn handle_config(ctx: &FuriContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    print_result(ctx.api.config(action)?)
}

fn print_result(result: CmdResult) -> Result<()> {
    for line in &result.output {
        println!("{}", line);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
