// lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use life::{
    create_board, parse_points, Board, Boundary, Delay, InitialBoard, Iterated, NoDelay, Pacer,
    Pattern, Presenter, RandomPlacement, Rect, Rule, SimulationConfig, StrategyKind,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Runs Conway's Game of Life (or any B/S rule) in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// named starting pattern, e.g. glider or gosper-glider-gun
    #[arg(long, conflicts_with_all = ["points", "random"])]
    pattern: Option<Pattern>,
    /// living cells as 'x,y' pairs separated by ';'
    #[arg(long, allow_hyphen_values = true)]
    points: Option<String>,
    /// number of randomly placed living cells
    #[arg(long, conflicts_with = "points")]
    random: Option<u64>,
    /// seed for --random, picked from the OS when missing
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = Rule::conway())]
    rule: Rule,
    #[arg(long, default_value_t = StrategyKind::default())]
    strategy: StrategyKind,
    #[arg(long, default_value_t = Boundary::default())]
    boundary: Boundary,
    #[arg(long, default_value_t = SimulationConfig::DEFAULT_SIZE)]
    width: u32,
    #[arg(long, default_value_t = SimulationConfig::DEFAULT_SIZE)]
    height: u32,
    /// 0 runs nothing
    #[arg(long, default_value_t = SimulationConfig::DEFAULT_MAX_TURNS)]
    max_turns: u64,
    /// generations searched for a repeat
    #[arg(long, default_value_t = SimulationConfig::default().history_len)]
    history: usize,
    /// pause between generations
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
    /// only print the final summary
    #[arg(long, short)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            width: self.width,
            height: self.height,
            max_turns: self.max_turns,
            history_len: self.history,
            rule: self.rule,
            strategy: self.strategy,
            boundary: self.boundary,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
    fn initial(&self) -> anyhow::Result<InitialBoard> {
        Ok(match (&self.pattern, &self.points, self.random) {
            (Some(pattern), None, None) => InitialBoard::Pattern(*pattern),
            (None, Some(points), None) => InitialBoard::Points(parse_points(points)?),
            (None, None, Some(count)) => InitialBoard::Random(RandomPlacement {
                width: self.width,
                height: self.height,
                count,
            }),
            (None, None, None) => InitialBoard::Pattern(Pattern::Glider),
            _ => bail!("pick only one of --pattern, --points and --random"),
        })
    }
}

/// prints every generation as rows of '.' and 'o'
struct TextPresenter {
    window: Rect,
}
impl TextPresenter {
    fn print(&self, state: &Iterated<Board>) {
        println!("generation {}", state.generation);
        print!("{}", state.value.to_test_format(self.window));
        println!();
    }
}
impl Presenter for TextPresenter {
    fn start(&mut self, initial: &Iterated<Board>) {
        self.print(initial);
    }
    fn present(&mut self, _prev: &Iterated<Board>, next: &Iterated<Board>) -> ControlFlow<()> {
        self.print(next);
        ControlFlow::Continue(())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let initial = args.initial()?;
    let board = create_board(&initial, &mut rng)
        .with_context(|| format!("creating the initial board (seed {seed})"))?;
    info!(rule = %config.rule, strategy = %config.strategy, seed, "starting");

    let simulation = config.simulation(board)?;
    let summary = if args.quiet {
        simulation.run()
    } else {
        let mut presenter = TextPresenter {
            window: config.window(),
        };
        let mut pacer: Box<dyn Pacer> = if config.delay.is_zero() {
            Box::new(NoDelay)
        } else {
            Box::new(Delay(config.delay))
        };
        simulation.run_with(&mut presenter, pacer.as_mut())
    };
    println!("{summary}");
    Ok(())
}
