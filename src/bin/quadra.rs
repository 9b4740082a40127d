use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use quadra_wm::common::config::{Config, config_file};
use quadra_wm::common::log;
use quadra_wm::layout_engine::{
    Action, ActionRecord, LayoutEngine, ResolveRequest, WindowId, WindowState,
};
use quadra_wm::sys::geometry::Rect;
use quadra_wm::sys::screen::ScreenArrangement;
use strum::IntoEnumIterator;

/// Offline driver for the layout engine: feed it an action, the display
/// arrangement, and the window's frame, get the target rectangle as JSON.
#[derive(Parser)]
#[command(name = "quadra", version)]
struct Cli {
    /// Path to configuration file to use (overrides default).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one action and print the resulting rectangle.
    Resolve {
        /// Action name, e.g. left_half or top_left_ninth.
        action: String,

        /// Visible frame of a display as x,y,width,height; repeat the flag
        /// for a multi-display arrangement.
        #[arg(long = "screen", value_name = "X,Y,W,H", required = true)]
        screens: Vec<RectArg>,

        /// Current window frame as x,y,width,height.
        #[arg(long, value_name = "X,Y,W,H")]
        window: RectArg,

        /// Action recorded for this window by the previous invocation.
        #[arg(long, value_name = "ACTION")]
        prev_action: Option<String>,

        /// Rect produced by the previous invocation.
        #[arg(long, value_name = "X,Y,W,H")]
        prev_rect: Option<RectArg>,

        /// Consecutive repeat count of the previous action.
        #[arg(long, default_value_t = 1)]
        prev_count: u32,
    },

    /// List every action name the engine understands.
    Actions,

    /// Parse the configuration file and report validation issues.
    CheckConfig,
}

#[derive(Clone, Debug)]
struct RectArg(Rect);

impl FromStr for RectArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|e| format!("invalid rect '{s}': {e}"))?;
        let [x, y, width, height] = parts[..] else {
            return Err(format!("invalid rect '{s}': expected x,y,width,height"));
        };
        Ok(RectArg(Rect::new(x, y, width, height)))
    }
}

fn parse_action(name: &str) -> Result<Action> {
    Action::from_str(name).with_context(|| {
        format!("unknown action '{name}'; run `quadra actions` for the full list")
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => {
            let path = config_file();
            if path.exists() {
                Ok(Config::load(&path)?)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn main() {
    log::init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    match cli.command {
        Commands::Resolve {
            action,
            screens,
            window,
            prev_action,
            prev_rect,
            prev_count,
        } => {
            let action = parse_action(&action)?;
            let history = match (prev_action, prev_rect) {
                (Some(prev), Some(rect)) => Some(ActionRecord {
                    action: parse_action(&prev)?,
                    sub_action: None,
                    rect: rect.0,
                    count: prev_count,
                }),
                (None, None) => None,
                _ => bail!("--prev-action and --prev-rect must be given together"),
            };
            let engine = LayoutEngine::new(config.settings.engine_settings());
            let request = ResolveRequest {
                action,
                screens: ScreenArrangement::from_frames(
                    screens.into_iter().map(|r| r.0).collect(),
                ),
                window: WindowState {
                    id: WindowId::new(0),
                    frame: window.0,
                },
                history,
            };
            let result = engine.resolve(&request);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Actions => {
            for action in Action::iter() {
                println!("{action}");
            }
        }
        Commands::CheckConfig => {
            let issues = config.settings.validate();
            if issues.is_empty() {
                println!("configuration ok");
            } else {
                for issue in &issues {
                    eprintln!("{issue}");
                }
                bail!("{} configuration issue(s)", issues.len());
            }
        }
    }
    Ok(())
}
