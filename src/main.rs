//! # chatview CLI
//!
//! Command-line interface for the chatview library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatview::ChatviewError;
use chatview::cli::Args;
use chatview::config::ViewerConfig;
use chatview::media::MediaIndex;
use chatview::page::{render_page, write_page};
use chatview::parser::TranscriptParser;
use chatview::sender::SenderClasses;
use chatview::sidecar::TranscriptionIndex;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatviewError> {
    let total_start = Instant::now();
    let mut args = <Args as ClapParser>::parse();
    args.apply_base_dir();

    println!("💬 chatview v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📖 Chat:    {}", args.chat_txt.display());
    println!("📂 Media:   {}", args.media_dir.display());
    println!("💾 Output:  {}", args.output_html.display());
    if let Some(ref me) = args.me {
        println!("👤 Me:      {}", me);
    }
    println!();

    // Step 1: Parse the transcript (missing file aborts before anything else)
    println!("⏳ Reading chat...");
    let parse_start = Instant::now();
    let parser = TranscriptParser::new();
    let messages = parser.parse(&args.chat_txt)?;
    println!(
        "   {} messages read ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Index the media tree; a missing root degrades to text-only
    let index = if args.media_dir.is_dir() {
        let index = MediaIndex::build(&args.media_dir, &args.output_html);
        println!("🖼️  {} media files indexed", index.len());
        index
    } else {
        println!("⚠️  Media directory not found; generating text only.");
        MediaIndex::empty()
    };

    // Step 3: Load transcription sidecars produced by external tooling
    let transcriptions = TranscriptionIndex::load(&index, &args.output_html);
    if !transcriptions.is_empty() {
        println!("🎙️  {} transcriptions loaded", transcriptions.len());
    }

    // Step 4: Classify senders and assemble the page
    let senders = SenderClasses::classify(&messages, args.me.as_deref());
    let config = match args.me {
        Some(me) => ViewerConfig::new().with_me(me),
        None => ViewerConfig::new(),
    }
    .with_title(args.title);

    println!("📝 Generating HTML...");
    let html = render_page(&messages, &index, &senders, &transcriptions, &config);
    write_page(&args.output_html, &html)?;

    println!();
    println!(
        "✅ Done! {} written in {:.2}s",
        args.output_html.display(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
