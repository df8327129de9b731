//! # Pagecraft CLI
//!
//! Usage:
//!   pagecraft page.json --breakpoint mobile -o layout.json
//!   echo '{ ... }' | pagecraft --reflow
//!   pagecraft --example > page.json
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use pagecraft::{Breakpoint, Document, EditorConfig, ElementStore, PagecraftError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_page_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn run(args: &[String]) -> Result<(), PagecraftError> {
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let breakpoint: Breakpoint = flag_value(args, "--breakpoint")
        .unwrap_or("desktop")
        .parse()?;
    let config = match flag_value(args, "--config") {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let document = Document::from_json(&input)?;
    let mut store = ElementStore::with_document(document, config);
    if args.iter().any(|a| a == "--reflow") {
        store.recalculate_positions();
    }
    tracing::info!(
        elements = store.elements().len(),
        breakpoint = breakpoint.name(),
        "resolving layout"
    );

    let snapshot = store.snapshot(breakpoint);
    let json = serde_json::to_string_pretty(&snapshot)?;

    match flag_value(args, "-o") {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!(
                "✓ Written {} elements ({} × {}) to {}",
                snapshot.elements.len(),
                snapshot.canvas.width,
                snapshot.canvas.height,
                path
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn example_page_json() -> &'static str {
    r##"{
  "background": { "type": "color", "value": "#f8fafc", "opacity": 1.0 },
  "elements": [
    {
      "id": "hero-heading",
      "type": "heading",
      "content": { "text": "Launch Week", "level": 1, "fontSize": 40, "color": "#0f172a" },
      "position": { "x": 400, "y": 50 },
      "size": { "width": 400, "height": 60 },
      "spacing": { "top": 0, "bottom": 20 },
      "style": { "alignment": "center" },
      "responsive": {
        "mobile": { "content": { "fontSize": 28, "customWidth": 335 } }
      }
    },
    {
      "id": "hero-text",
      "type": "text",
      "content": {
        "text": "Five days, five releases. Follow along as we ship.",
        "fontSize": 18,
        "padding": { "top": 8, "right": 8, "bottom": 8, "left": 8 }
      },
      "position": { "x": 400, "y": 130 },
      "size": { "width": 400, "height": 80 },
      "spacing": { "top": 0, "bottom": 20 },
      "style": { "alignment": "center" }
    },
    {
      "id": "gap",
      "type": "spacer",
      "content": { "height": 60 },
      "position": { "x": 20, "y": 230 },
      "size": { "width": 1160, "height": 60 },
      "spacing": { "top": 0, "bottom": 20 }
    },
    {
      "id": "cta",
      "type": "button",
      "content": { "label": "Get notified", "url": "https://example.com", "size": "large" },
      "position": { "x": 460, "y": 310 },
      "size": { "width": 280, "height": 64 },
      "spacing": { "top": 0, "bottom": 20 },
      "style": { "alignment": "center" }
    },
    {
      "id": "teaser",
      "type": "video",
      "content": { "src": "uploads/teaser.mp4", "alt": "Teaser" },
      "position": { "x": 400, "y": 394 },
      "size": { "width": 400, "height": 300 },
      "spacing": { "top": 0, "bottom": 20 },
      "style": { "alignment": "center" },
      "responsive": {
        "tablet": { "size": { "width": 600 } }
      }
    }
  ]
}
"##
}
