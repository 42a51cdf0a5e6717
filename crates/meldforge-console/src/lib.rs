//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that renders the structured events emitted by
//! `meldforge_solver` as one line each.
//!
//! ## Log Levels
//!
//! - **INFO**: Model construction, solve start/end
//! - **DEBUG**: Bound program sizes

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter::Directive, EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default `meldforge_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let default: Directive = "meldforge_solver=info"
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(default)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(MeldConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "MeldForge".bright_cyan().bold(),
        format!("v{VERSION} - Rummikub placement solver").bright_white()
    );
    let _ = stdout.flush();
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats solver events with colors.
pub struct MeldConsoleLayer;

impl<S: Subscriber> Layer<S> for MeldConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("meldforge_solver") && !target.starts_with("meldforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    mode: Option<String>,
    backend: Option<String>,
    tile_count: Option<u64>,
    set_count: Option<u64>,
    nonzeros: Option<u64>,
    jokers: Option<u64>,
    rack_tiles: Option<u64>,
    table_tiles: Option<u64>,
    tiles_placed: Option<u64>,
    sets: Option<u64>,
    variables: Option<u64>,
    constraints: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "mode" => self.mode = Some(s),
            "backend" => self.backend = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "tile_count" => &mut self.tile_count,
            "set_count" => &mut self.set_count,
            "nonzeros" => &mut self.nonzeros,
            "jokers" => &mut self.jokers,
            "rack_tiles" => &mut self.rack_tiles,
            "table_tiles" => &mut self.table_tiles,
            "tiles_placed" => &mut self.tiles_placed,
            "sets" => &mut self.sets,
            "variables" => &mut self.variables,
            "constraints" => &mut self.constraints,
            "duration_ms" => &mut self.duration_ms,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "mode" => self.mode = Some(value.to_string()),
            "backend" => self.backend = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "model_built" => format_model_built(v),
        "program_bound" => format_program_bound(v),
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs()).bright_black().to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_model_built(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Model built │ {} sets │ {} tiles │ {} nonzeros",
        format_elapsed(),
        "◆".bright_magenta().bold(),
        count(v.set_count).bright_yellow(),
        count(v.tile_count).bright_yellow(),
        count(v.nonzeros).bright_yellow(),
    );
    if let Some(jokers) = v.jokers.filter(|&j| j > 0) {
        output.push_str(&format!(" │ {} jokers", jokers.bright_yellow()));
    }
    output
}

fn format_program_bound(v: &EventVisitor) -> String {
    format!(
        "{} {} Program │ {} variables │ {} constraints",
        format_elapsed(),
        "·".bright_black(),
        count(v.variables).white(),
        count(v.constraints).white(),
    )
}

fn format_solve_start(v: &EventVisitor) -> String {
    let mode = v.mode.as_deref().unwrap_or("unknown");
    let mut output = format!(
        "{} {} Solving {} │ {} rack tiles │ {} table tiles",
        format_elapsed(),
        "▶".bright_green().bold(),
        mode.white().bold(),
        count(v.rack_tiles).bright_yellow(),
        count(v.table_tiles).bright_yellow(),
    );
    if let Some(backend) = &v.backend {
        output.push_str(&format!(" │ {}", backend.bright_blue()));
    }
    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let mode = v.mode.as_deref().unwrap_or("unknown");
    let placed = v.tiles_placed.unwrap_or(0);
    let result = if placed == 0 {
        "no placement".yellow().bold().to_string()
    } else {
        format!(
            "{} tiles in {} sets",
            count(Some(placed)).bright_green().bold(),
            count(v.sets).bright_green(),
        )
    };
    format!(
        "{} {} Solved {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        mode.white().bold(),
        result,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
