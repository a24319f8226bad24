//! UnitéPro CLI
//!
//! Line-oriented host for the conversion core. Owns a session and its
//! rolling history; contains no conversion logic of its own.
//!
//! Commands:
//! - categories
//! - units <category>
//! - convert <category> <from> <to> <value>
//! - swap <from> <to>
//! - history
//! - clear
//! - help
//! - quit

use std::env;
use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use unitepro::{
    format_value, list_categories, swap_units, units_for, Category, ConversionRecord, Session,
    CATALOG,
};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed host command
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Categories,
    Units { category: String },
    Convert { category: String, from: String, to: String, value: String },
    Swap { from: String, to: String },
    History,
    Clear,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Err(String::new());
    };
    let rest: Vec<&str> = words.collect();

    match (keyword, rest.as_slice()) {
        ("categories", []) => Ok(Command::Categories),
        ("units", [category]) => Ok(Command::Units {
            category: category.to_string(),
        }),
        ("convert", [category, from, to, value]) => Ok(Command::Convert {
            category: category.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            value: value.to_string(),
        }),
        ("swap", [from, to]) => Ok(Command::Swap {
            from: from.to_string(),
            to: to.to_string(),
        }),
        ("history", []) => Ok(Command::History),
        ("clear", []) => Ok(Command::Clear),
        ("help", []) => Ok(Command::Help),
        ("quit", []) | ("exit", []) => Ok(Command::Quit),
        _ => Err(format!(
            "Commande invalide: {}. Tapez 'help' pour la liste.",
            line.trim()
        )),
    }
}

fn render_record(record: &ConversionRecord) -> String {
    let from = CATALOG.metadata_of(&record.from_unit);
    let to = CATALOG.metadata_of(&record.to_unit);
    format!(
        "{} {} = {} {}  [{} {}]",
        format_value(record.from_value),
        from.symbol,
        format_value(record.to_value),
        to.symbol,
        record.category.label(),
        record.timestamp.format("%H:%M:%S")
    )
}

fn run_command(session: &mut Session, command: Command, json: bool) -> Vec<String> {
    match command {
        Command::Categories => list_categories()
            .iter()
            .map(|c| {
                if json {
                    serde_json::json!({ "id": c.id(), "label": c.label() }).to_string()
                } else {
                    format!("{}  ({})", c.id(), c.label())
                }
            })
            .collect(),
        Command::Units { category } => match category.parse::<Category>() {
            Ok(category) => {
                if json {
                    let listing = CATALOG.listing_of(category);
                    match serde_json::to_string(&listing) {
                        Ok(line) => vec![line],
                        Err(e) => vec![format!("erreur JSON: {}", e)],
                    }
                } else {
                    let (sources, targets) = units_for(category);
                    let mut lines = vec![format!("{}:", category.label())];
                    for id in sources {
                        lines.push(format!("  {}: {}", id, CATALOG.metadata_of(id)));
                    }
                    lines.push("→".to_string());
                    for id in targets {
                        lines.push(format!("  {}: {}", id, CATALOG.metadata_of(id)));
                    }
                    lines
                }
            }
            Err(e) => vec![e.to_string()],
        },
        Command::Convert { category, from, to, value } => match category.parse::<Category>() {
            Ok(category) => {
                let outcome = session.convert(category, &from, &to, &value);
                debug!(
                    category = %category,
                    from = %from,
                    to = %to,
                    success = outcome.is_success(),
                    "convert"
                );
                if json {
                    match serde_json::to_string(&outcome) {
                        Ok(line) => vec![line],
                        Err(e) => vec![format!("erreur JSON: {}", e)],
                    }
                } else {
                    vec![outcome.to_string()]
                }
            }
            Err(e) => vec![e.to_string()],
        },
        Command::Swap { from, to } => {
            let (from, to) = swap_units(&from, &to);
            vec![format!("{} {}", from, to)]
        }
        Command::History => {
            if session.history().is_empty() {
                vec!["Aucune conversion récente".to_string()]
            } else if json {
                session
                    .history()
                    .iter()
                    .map(|r| serde_json::to_string(r).unwrap_or_default())
                    .collect()
            } else {
                session.history().iter().map(render_record).collect()
            }
        }
        Command::Clear => {
            session.clear_history();
            vec!["Historique effacé".to_string()]
        }
        Command::Help => vec![
            "categories                             liste des catégories".to_string(),
            "units <categorie>                      unités source et cible".to_string(),
            "convert <cat> <de> <vers> <valeur>     effectue la conversion".to_string(),
            "swap <de> <vers>                       échange les unités".to_string(),
            "history                                5 dernières conversions".to_string(),
            "clear                                  vide l'historique".to_string(),
            "quit                                   quitte".to_string(),
        ],
        Command::Quit => Vec::new(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let json = env::args().any(|arg| arg == "--json");

    info!(version = APP_VERSION, json, "UnitéPro CLI started");
    eprintln!("UnitéPro v{}, tapez 'help' pour les commandes", APP_VERSION);

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                if !message.is_empty() {
                    println!("{}", message);
                }
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        for out in run_command(&mut session, command, json) {
            println!("{}", out);
        }
        let _ = stdout.flush();
    }

    info!("UnitéPro CLI stopped");
}
