//! Topo Roids entry point
//!
//! Terminal demo driver. Commands arrive line-buffered on stdin (`w`/`a`/
//! `s`/`d` to fly, a topology name to reglue the arena, `r` to reset, `q`
//! to quit) while the universe steps at a fixed 50 ms cadence. The world is
//! printed as ASCII with `--ascii`, otherwise logged periodically.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

use glam::Vec2;

use topo_roids::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use topo_roids::renderer::{self, Shape};
use topo_roids::runner::{GameLoop, InputEvent};
use topo_roids::settings::Settings;
use topo_roids::sim::{Topology, Universe};

const USAGE: &str = "usage: topo-roids [--settings FILE] [--topology NAME] \
[--seed N] [--balls N] [--ticks N] [--ascii]
  topologies: plane, proj_plane, klein, torus, sphere";

struct Options {
    settings: Settings,
    /// Run this many ticks headless and exit, instead of the live loop
    ticks: Option<u64>,
    ascii: bool,
}

fn main() {
    env_logger::init();

    let opts = match parse_args(std::env::args().skip(1).collect()) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            std::process::exit(2);
        }
    };

    log::info!(
        "Topo Roids starting: {} arena, {} ball(s)",
        opts.settings.topology.as_str(),
        opts.settings.universe().balls.len()
    );

    let (mut game, tx) = GameLoop::new(opts.settings.universe());

    if let Some(ticks) = opts.ticks {
        // Bounded headless run, as fast as possible
        game.run_ticks(ticks, |_| {});
        let universe = game.universe();
        log::info!("Ran {} ticks", universe.time_ticks);
        let p = universe.player.body.position();
        println!("player ({:.1}, {:.1}) after {} ticks", p.x, p.y, universe.time_ticks);
        for (i, ball) in universe.balls.iter().enumerate() {
            let b = ball.body.position();
            println!("ball {i} ({:.1}, {:.1})", b.x, b.y);
        }
        return;
    }

    spawn_stdin_reader(tx);

    if opts.ascii {
        game.run(|universe| {
            print!("\x1b[2J\x1b[H{}", ascii_frame(universe));
        });
    } else {
        game.run(|universe| {
            if universe.time_ticks % 20 == 0 {
                let p = universe.player.body.position();
                let b = universe
                    .balls
                    .first()
                    .map(|ball| ball.body.position())
                    .unwrap_or(Vec2::ZERO);
                log::info!(
                    "tick {} player ({:.1}, {:.1}) ball ({:.1}, {:.1})",
                    universe.time_ticks,
                    p.x,
                    p.y,
                    b.x,
                    b.y,
                );
            }
        });
    }
}

fn parse_args(args: Vec<String>) -> Result<Options, String> {
    let mut opts = Options {
        settings: Settings::default(),
        ticks: None,
        ascii: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .ok_or_else(|| format!("{name} expects a value"))
        };
        match arg.as_str() {
            "--settings" => {
                let path = PathBuf::from(value("--settings")?);
                opts.settings = Settings::load(&path)
                    .ok_or_else(|| format!("could not load {}", path.display()))?;
            }
            "--topology" => {
                let name = value("--topology")?;
                opts.settings.topology = Topology::from_str(&name)
                    .ok_or_else(|| format!("unknown topology {name:?}"))?;
            }
            "--seed" => {
                let seed = value("--seed")?;
                opts.settings.seed =
                    Some(seed.parse().map_err(|_| format!("bad seed {seed:?}"))?);
            }
            "--balls" => {
                let n = value("--balls")?;
                opts.settings.balls = n.parse().map_err(|_| format!("bad ball count {n:?}"))?;
            }
            "--ticks" => {
                let n = value("--ticks")?;
                opts.ticks = Some(n.parse().map_err(|_| format!("bad tick count {n:?}"))?);
            }
            "--ascii" => opts.ascii = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument {other:?}")),
        }
    }
    Ok(opts)
}

/// Feed stdin lines to the game loop as input events
fn spawn_stdin_reader(tx: Sender<InputEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            for event in parse_line(&line) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
    });
}

/// Map one input line to events: a topology name, or a run of key letters
fn parse_line(line: &str) -> Vec<InputEvent> {
    let line = line.trim();
    if let Some(topology) = Topology::from_str(line) {
        return vec![InputEvent::SetTopology(topology)];
    }
    line.chars()
        .filter_map(|ch| match ch {
            'a' => Some(InputEvent::Left),
            'd' => Some(InputEvent::Right),
            'w' => Some(InputEvent::Forward),
            's' => Some(InputEvent::Reverse),
            'r' => Some(InputEvent::Reset),
            'q' => Some(InputEvent::Quit),
            _ => None,
        })
        .collect()
}

const COLS: usize = 60;
const ROWS: usize = 24;

/// Rasterize one frame onto a character grid with a border
fn ascii_frame(universe: &Universe) -> String {
    let mut grid = vec![vec![' '; COLS]; ROWS];
    for shape in renderer::frame(universe).shapes {
        match shape {
            Shape::Circle { center, radius, .. } => {
                plot(&mut grid, center, if radius >= 10.0 { 'O' } else { 'o' });
            }
            Shape::Polygon { points, .. } => {
                for p in points {
                    plot(&mut grid, p, '#');
                }
            }
        }
    }

    let mut out = String::with_capacity((COLS + 3) * (ROWS + 2));
    out.push('+');
    out.push_str(&"-".repeat(COLS));
    out.push_str("+\n");
    for row in grid {
        out.push('|');
        out.extend(row);
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(COLS));
    out.push_str("+\n");
    out.push_str(&format!("[{}] wasd + enter, r=reset, q=quit\n", universe.topology.as_str()));
    out
}

/// Map an arena point to a grid cell; points off the arena (plane topology)
/// are simply not drawn
fn plot(grid: &mut [Vec<char>], p: Vec2, ch: char) {
    if p.x < 0.0 || p.x >= ARENA_WIDTH || p.y < 0.0 || p.y >= ARENA_HEIGHT {
        return;
    }
    let col = (p.x / ARENA_WIDTH * COLS as f32) as usize;
    let row = (p.y / ARENA_HEIGHT * ROWS as f32) as usize;
    grid[row.min(ROWS - 1)][col.min(COLS - 1)] = ch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_keys() {
        assert_eq!(
            parse_line("wwa"),
            vec![InputEvent::Forward, InputEvent::Forward, InputEvent::Left]
        );
        assert_eq!(parse_line("q"), vec![InputEvent::Quit]);
        assert_eq!(parse_line("xyz"), vec![]);
    }

    #[test]
    fn test_parse_line_topology() {
        assert_eq!(
            parse_line("klein"),
            vec![InputEvent::SetTopology(Topology::Klein)]
        );
        assert_eq!(
            parse_line("  proj_plane "),
            vec![InputEvent::SetTopology(Topology::ProjPlane)]
        );
    }

    #[test]
    fn test_parse_args_flags() {
        let opts = parse_args(
            ["--topology", "sphere", "--seed", "7", "--balls", "3", "--ticks", "100"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
        .unwrap();
        assert_eq!(opts.settings.topology, Topology::Sphere);
        assert_eq!(opts.settings.seed, Some(7));
        assert_eq!(opts.settings.balls, 3);
        assert_eq!(opts.ticks, Some(100));
        assert!(!opts.ascii);
    }

    #[test]
    fn test_parse_args_rejects_unknown() {
        assert!(parse_args(vec!["--bogus".into()]).is_err());
        assert!(parse_args(vec!["--topology".into(), "cube".into()]).is_err());
    }

    #[test]
    fn test_ascii_frame_has_border_and_objects() {
        let universe = Universe::new(Topology::Torus);
        let frame = ascii_frame(&universe);
        assert!(frame.starts_with('+'));
        assert!(frame.contains('O'));
        assert!(frame.contains('#'));
    }
}
