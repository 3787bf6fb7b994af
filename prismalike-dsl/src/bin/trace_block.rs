//! KV Block Tracer - Shows the flow through text → cursor → KVBlock
//!
//! Usage: cargo run --bin trace_block <file> [block-name]
//!
//! If the file starts with a `name {` header (e.g. `datasource db {`), the
//! header is skipped and `///` lines above it become the block comments.

use prismalike_dsl::{parse_block, pretty_print, skip_header, ParseResult, SourceCursor};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prismalike_dsl=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin trace_block <file> [block-name]");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --bin trace_block schema/datasource.prisma db");
        std::process::exit(1);
    }

    let path = &args[1];

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut cursor = SourceCursor::new(&content);
    let mut header = skip_header(&mut cursor).unwrap_or_default();
    if let Some(name) = args.get(2) {
        header.name = name.clone();
    }
    if header.name.is_empty() {
        header.name = "block".to_string();
    }

    tracing::info!(file = %path, block = %header.name, "Tracing block");

    match parse_block(&mut cursor, &header) {
        ParseResult::Success { value, diagnostics } => {
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic);
            }

            println!("KVBLOCK:");
            match serde_json::to_string_pretty(&value) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to render JSON: {}", e),
            }
            println!();

            println!("CANONICAL:");
            print!("{}", pretty_print(&value));

            tracing::info!(
                lines = value.lines.len(),
                warnings = diagnostics.len(),
                "Parse succeeded"
            );
        }
        ParseResult::Failure { diagnostics } => {
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic);
            }
            tracing::info!(diagnostics = diagnostics.len(), "Parse failed");
            std::process::exit(1);
        }
    }
}
