//! mergeviz entrypoint.
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use core_config::{Config, ConfigContext, load_from};
use core_render::writer::Writer;
use core_render::{
    ColorScheme, HtmlDocument, Region, RowRenderer, TerminalSurface, container_id,
};
use core_sort::{Trace, lane_count, merge_sort, random_sequence, shuffled_range};
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalCapabilities};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const STATUS_ROWS: u16 = 1;
const LOG_FILE: &str = "mergeviz.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "mergeviz", version, about = "Animated merge sort visualizer")]
struct Args {
    /// Optional configuration file path (overrides discovery of `mergeviz.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Number of items to sort (overrides `[items] count`).
    #[arg(long)]
    count: Option<usize>,
    /// Seed for a reproducible run; OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// How the unsorted input is produced.
    #[arg(long, value_enum, default_value_t = Source::Shuffled)]
    source: Source,
    /// Namespace for container and row ids.
    #[arg(long, default_value = "merge")]
    name: String,
    /// Write an HTML page to this path instead of drawing in the terminal.
    #[arg(long, conflicts_with = "trace")]
    html: Option<PathBuf>,
    /// Print every reported step as text instead of drawing.
    #[arg(long)]
    trace: bool,
    /// Per-step frame delay in milliseconds (overrides `[animation] frame_delay_ms`).
    #[arg(long = "delay-ms")]
    delay_ms: Option<u64>,
    /// Leave the terminal immediately after the sort completes.
    #[arg(long = "no-wait")]
    no_wait: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Source {
    /// A random permutation of `0..count`.
    Shuffled,
    /// `count` independent values in `[0, count]`.
    Random,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Shuffled => "shuffled",
            Source::Random => "random",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Output {
    Terminal,
    Html(PathBuf),
    Trace,
}

impl Args {
    fn output(&self) -> Output {
        match (&self.html, self.trace) {
            (_, true) => Output::Trace,
            (Some(path), false) => Output::Html(path.clone()),
            (None, false) => Output::Terminal,
        }
    }
}

struct AppStartup {
    _log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { _log_guard: None }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self._log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Everything a run needs after CLI and config are merged.
struct RunPlan {
    name: String,
    source: Source,
    config: Config,
    scheme: ColorScheme,
    frame_delay: Duration,
    rng: SmallRng,
}

impl RunPlan {
    fn from_args(args: &Args) -> Result<Self> {
        let mut config = load_from(args.config.clone())?;
        if let Some(count) = args.count {
            config.set_item_count(count);
        }
        let color = &config.file.color;
        let scheme = ColorScheme {
            hue: color.hue,
            saturation: color.saturation,
            min_lightness: color.min_lightness,
            max_lightness: color.max_lightness,
        };
        let frame_delay = args
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.file.animation.frame_delay());
        let rng = match args.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(Self {
            name: args.name.clone(),
            source: args.source,
            config,
            scheme,
            frame_delay,
            rng,
        })
    }

    /// Produce the unsorted input for `count` items.
    fn input(&mut self, count: usize) -> Vec<u32> {
        build_input(self.source, count, &mut self.rng)
    }
}

fn build_input<R: Rng + ?Sized>(source: Source, count: usize, rng: &mut R) -> Vec<u32> {
    match source {
        Source::Shuffled => shuffled_range(count, rng),
        Source::Random => {
            let max = u32::try_from(count).unwrap_or(u32::MAX);
            random_sequence(count, max, rng)
        }
    }
}

fn run_trace(plan: &mut RunPlan) -> Result<()> {
    let count = plan.config.apply_context(ConfigContext::unbounded());
    let input = plan.input(count);
    let mut trace = Trace::new();
    let sorted = merge_sort(&input, &mut trace);

    let mut out = stdout().lock();
    writeln!(out, "input  {input:?}")?;
    for step in trace.steps() {
        writeln!(
            out,
            "{indent}depth {depth}: {values:?}",
            indent = "  ".repeat(step.depth),
            depth = step.depth,
            values = step.values
        )?;
    }
    writeln!(out, "sorted {sorted:?}")?;
    Ok(())
}

fn run_html(plan: &mut RunPlan, path: &Path) -> Result<()> {
    let count = plan.config.apply_context(ConfigContext::unbounded());
    let input = plan.input(count);

    let mut doc = HtmlDocument::new(format!("{} - merge sort", plan.name));
    doc.add_container(container_id(&plan.name));
    let mut renderer = RowRenderer::new(plan.name.as_str(), count, plan.scheme, &mut doc)?;
    let sorted = merge_sort(&input, &mut renderer);
    let stats = renderer.stats();
    renderer.finish()?;

    doc.write_to(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        target: "runtime",
        path = %path.display(),
        items = sorted.len(),
        rows = stats.rows_created,
        reports = stats.reports,
        "html_written"
    );
    Ok(())
}

/// Lines left for sort lanes once the status line is reserved.
fn lanes_available(rows: u16) -> Result<u16> {
    let lanes = rows.saturating_sub(STATUS_ROWS);
    if lanes == 0 {
        bail!("terminal has {rows} line(s); need at least {} to draw", STATUS_ROWS + 1);
    }
    Ok(lanes)
}

fn run_terminal(plan: &mut RunPlan, wait: bool) -> Result<()> {
    let caps = TerminalCapabilities::detect();
    let mut backend = CrosstermBackend::new();
    backend.set_title("mergeviz")?;
    let guard = backend.enter_guard()?;

    let (columns, rows) = guard.size()?;
    let lanes = lanes_available(rows)?;
    let count = plan.config.apply_context(ConfigContext::new(columns, lanes));
    let input = plan.input(count);

    let region = Region::new(0, 0, columns, lane_count(count) as u16);
    let surface = TerminalSurface::new(stdout(), container_id(&plan.name), region, caps)
        .with_frame_delay(plan.frame_delay);
    let mut renderer = RowRenderer::new(plan.name.as_str(), count, plan.scheme, surface)?;
    let sorted = merge_sort(&input, &mut renderer);
    let stats = renderer.stats();
    let surface = renderer.finish()?;
    info!(
        target: "runtime",
        items = sorted.len(),
        frames = surface.frames(),
        rows = stats.rows_created,
        truecolor = caps.truecolor,
        "terminal_render_complete"
    );

    let mut status = Writer::new();
    status.move_to(0, lanes);
    let hint = if wait { " - press any key" } else { "" };
    status.print(format!(
        "sorted {} items in {} steps{hint}",
        sorted.len(),
        stats.reports
    ));
    status.flush_to(&mut stdout())?;

    if wait {
        guard.wait_for_key()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut app = AppStartup::new();
    app.configure_logging()?;
    AppStartup::install_panic_hook();

    info!(target: "runtime", "startup");
    let mut plan = RunPlan::from_args(&args)?;
    let output = args.output();
    info!(
        target: "runtime.startup",
        name = plan.name.as_str(),
        source = %plan.source,
        seed = args.seed,
        configured_count = plan.config.file.items.count,
        config_override = args.config.is_some(),
        output = ?output,
        "bootstrap_complete"
    );

    let result = match &output {
        Output::Trace => run_trace(&mut plan),
        Output::Html(path) => run_html(&mut plan, path),
        Output::Terminal => run_terminal(&mut plan, !args.no_wait),
    };
    if let Err(e) = &result {
        tracing::error!(target: "runtime", error = %e, "run_failed");
    }
    info!(target: "runtime", "shutdown");
    result
}
