//! sudsy-pick - shower thoughts without the TUI
//!
//! Prints random thoughts for scripts and prompts, and manages the saved list
//! shared with the `sudsy` terminal UI.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sudsy_core::catalog::{is_valid_spice, spice_label, TagKind};
use sudsy_core::format::{
    escape_html, escape_markdown, format_saved_time, sanitize_for_terminal, tag_line,
};
use sudsy_core::types::{MAX_SPICE, MIN_SPICE};
use sudsy_core::{
    add_saved, clear_saved, load_state, load_thoughts, save_state, AppState, Config, FileStore,
    Filter, Picker, Thought,
};

#[derive(Parser, Debug)]
#[command(name = "sudsy-pick")]
#[command(about = "Print random shower thoughts and manage saved ones")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Options for the default `pick` command
    #[command(flatten)]
    pick: PickArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick thoughts (the default)
    Pick(PickArgs),
    /// Print the saved list
    Saved {
        #[arg(long, value_enum, default_value_t = SavedFormat::Text)]
        format: SavedFormat,
    },
    /// Empty the saved list
    Clear,
    /// List category, vibe, and spice options
    Categories,
}

#[derive(Args, Debug, Clone)]
struct PickArgs {
    /// Category key (default: the one selected in the TUI)
    #[arg(long)]
    category: Option<String>,

    /// Vibe key (default: the one selected in the TUI)
    #[arg(long)]
    vibe: Option<String>,

    /// Maximum spice level, 1-5
    #[arg(long)]
    spice: Option<u8>,

    /// How many thoughts to print
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Add the picked thoughts to the saved list
    #[arg(long)]
    save: bool,

    #[arg(long, value_enum, default_value_t = PickFormat::Text)]
    format: PickFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PickFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SavedFormat {
    Text,
    Md,
    Json,
    Html,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = sudsy_core::logging::init(&config.logging).ok();

    let store = FileStore::default_location();

    match cli.command {
        Some(Command::Pick(args)) => run_pick(&config, &store, &args),
        None => run_pick(&config, &store, &cli.pick),
        Some(Command::Saved { format }) => print_saved(&load_state(&store), format),
        Some(Command::Clear) => {
            let state = clear_saved(load_state(&store));
            save_state(&store, &state);
            println!("Cleared saved thoughts.");
            Ok(())
        }
        Some(Command::Categories) => {
            print_categories();
            Ok(())
        }
    }
}

/// Resolve the filter from arguments, defaulting to the stored selections.
fn resolve_filter(args: &PickArgs, state: &AppState) -> Result<Filter> {
    let category = args.category.clone().unwrap_or_else(|| state.category_key.clone());
    let vibe = args.vibe.clone().unwrap_or_else(|| state.vibe_key.clone());
    let spice = args.spice.unwrap_or(state.spice_level);

    // Only explicit arguments are validated; stored keys fall through to the
    // picker, which handles unknown keys by widening the pool.
    if args.category.is_some() {
        check_key(TagKind::Category, "category", &category)?;
    }
    if args.vibe.is_some() {
        check_key(TagKind::Vibe, "vibe", &vibe)?;
    }
    if !is_valid_spice(spice) {
        anyhow::bail!("Spice must be between {MIN_SPICE} and {MAX_SPICE}, got {spice}");
    }

    Ok(Filter::new(category, vibe, spice))
}

fn check_key(kind: TagKind, what: &str, key: &str) -> Result<()> {
    if kind.find(key).is_some() {
        return Ok(());
    }
    let valid: Vec<&str> = kind.options().iter().map(|o| o.key).collect();
    anyhow::bail!("Unknown {what}: {key}. Use one of: {}", valid.join(", "))
}

fn run_pick(config: &Config, store: &FileStore, args: &PickArgs) -> Result<()> {
    let state = load_state(store);
    let filter = resolve_filter(args, &state)?;

    let content = load_thoughts(&config.content);
    let mut picker = Picker::new(content.thoughts).context("no thoughts available")?;

    let picks: Vec<Thought> = (0..args.count)
        .map(|_| picker.pick(&filter).clone())
        .collect();
    tracing::debug!(count = picks.len(), "Picked thoughts");

    if args.save {
        let state = picks.iter().fold(state, add_saved);
        save_state(store, &state);
    }

    match args.format {
        PickFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&picks).context("failed to serialize thoughts")?
            );
        }
        PickFormat::Text => {
            for (i, thought) in picks.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("🚿 {}", sanitize_for_terminal(&thought.text));
                println!(
                    "   {} · {}",
                    sanitize_for_terminal(&tag_line(thought)),
                    sanitize_for_terminal(&thought.id)
                );
            }
        }
    }

    Ok(())
}

fn print_saved(state: &AppState, format: SavedFormat) -> Result<()> {
    match format {
        SavedFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&state.saved)
                    .context("failed to serialize saved thoughts")?
            );
        }
        SavedFormat::Text => print_saved_text(state),
        SavedFormat::Md => print_saved_markdown(state),
        SavedFormat::Html => print_saved_html(state),
    }
    Ok(())
}

fn print_saved_text(state: &AppState) {
    if state.saved.is_empty() {
        println!("None yet. Save your first brain-spark. 💡");
        return;
    }
    let now = Utc::now();
    for item in &state.saved {
        println!("• {}", sanitize_for_terminal(&item.text));
        println!(
            "  {} · {}",
            sanitize_for_terminal(&item.id),
            format_saved_time(item.ts, now)
        );
    }
}

fn print_saved_markdown(state: &AppState) {
    println!("# Saved shower thoughts");
    println!();
    if state.saved.is_empty() {
        println!("_None yet._");
        return;
    }
    for item in &state.saved {
        println!(
            "- {} _({}, {})_",
            escape_markdown(&item.text),
            escape_markdown(&item.id),
            item.ts.format("%Y-%m-%d")
        );
    }
}

fn print_saved_html(state: &AppState) {
    println!("<ul class=\"saved\">");
    for item in &state.saved {
        println!(
            "  <li data-id=\"{}\"><span class=\"text\">{}</span> <time datetime=\"{}\">{}</time></li>",
            escape_html(&item.id),
            escape_html(&item.text),
            item.ts.to_rfc3339(),
            item.ts.format("%b %d, %Y")
        );
    }
    println!("</ul>");
}

fn print_categories() {
    println!("Categories:");
    for option in TagKind::Category.options() {
        println!("  {:<12} {}", option.key, option.display());
    }
    println!();
    println!("Vibes:");
    for option in TagKind::Vibe.options() {
        println!("  {:<12} {}", option.key, option.display());
    }
    println!();
    println!("Spice:");
    for level in MIN_SPICE..=MAX_SPICE {
        println!("  {:<12} {}", level, spice_label(level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PickArgs {
        PickArgs {
            category: None,
            vibe: None,
            spice: None,
            count: 1,
            save: false,
            format: PickFormat::Text,
        }
    }

    #[test]
    fn test_filter_defaults_to_stored_state() {
        let state = AppState::default().with_category("tech").with_spice_level(4);
        let filter = resolve_filter(&args(), &state).unwrap();
        assert_eq!(filter, Filter::new("tech", "any", 4));
    }

    #[test]
    fn test_explicit_arguments_override_state() {
        let state = AppState::default().with_category("tech");
        let args = PickArgs {
            category: Some("meta".to_string()),
            vibe: Some("calm".to_string()),
            spice: Some(2),
            ..args()
        };
        assert_eq!(
            resolve_filter(&args, &state).unwrap(),
            Filter::new("meta", "calm", 2)
        );
    }

    #[test]
    fn test_rejects_unknown_keys_and_spice() {
        let state = AppState::default();

        let bad_category = PickArgs {
            category: Some("nope".to_string()),
            ..args()
        };
        let err = resolve_filter(&bad_category, &state).unwrap_err().to_string();
        assert!(err.contains("Unknown category: nope"));
        assert!(err.contains("existential"));

        let bad_vibe = PickArgs {
            vibe: Some("grumpy".to_string()),
            ..args()
        };
        assert!(resolve_filter(&bad_vibe, &state).is_err());

        let bad_spice = PickArgs {
            spice: Some(0),
            ..args()
        };
        assert!(resolve_filter(&bad_spice, &state).is_err());
    }

    #[test]
    fn test_cli_parses_default_pick() {
        let cli = Cli::try_parse_from(["sudsy-pick", "--count", "3", "--format", "json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.pick.count, 3);
        assert_eq!(cli.pick.format, PickFormat::Json);

        assert!(Cli::try_parse_from(["sudsy-pick", "--count", "0"]).is_err());
        assert!(Cli::try_parse_from(["sudsy-pick", "saved", "--format", "html"]).is_ok());
    }
}
