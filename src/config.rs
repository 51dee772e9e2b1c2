use glium::glutin::event::VirtualKeyCode;
use lazy_static::lazy_static;
use log::warn;
use std::convert::TryFrom;
use std::str::FromStr;

/// Default number of columns.
const DEFAULT_WIDTH: usize = 20;
/// Default number of rows.
const DEFAULT_HEIGHT: usize = 20;
/// Default size of a cell on screen, in logical pixels.
const DEFAULT_CELL_SIZE: u32 = 30;

lazy_static! {
    /// Configuration for this run, read from the environment at startup.
    pub static ref CONFIG: Config = Config::from_env();
}

/// Game settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Number of mines, or `None` for one mine per ten cells.
    pub mines: Option<usize>,
    /// Seed for mine placement, or `None` to seed from system entropy.
    pub seed: Option<u64>,
    /// Initial size of a cell on screen, in logical pixels.
    pub cell_size: u32,
    /// Key that starts a new game once the current one is over.
    pub reset_key: VirtualKeyCode,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mines: None,
            seed: None,
            cell_size: DEFAULT_CELL_SIZE,
            reset_key: VirtualKeyCode::Space,
        }
    }
}
impl Config {
    /// Returns the default configuration, overridden by `DEMINER_WIDTH`,
    /// `DEMINER_HEIGHT`, `DEMINER_MINES`, and `DEMINER_SEED`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Returns the default configuration, overridden by variables looked up
    /// with `var`. Unparseable values are ignored with a warning.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut ret = Self::default();
        if let Some(width) = parse_var(&var, "DEMINER_WIDTH") {
            ret.width = width;
        }
        if let Some(height) = parse_var(&var, "DEMINER_HEIGHT") {
            ret.height = height;
        }
        ret.mines = parse_var(&var, "DEMINER_MINES").or(ret.mines);
        ret.seed = parse_var(&var, "DEMINER_SEED").or(ret.seed);
        ret
    }

    /// Returns the initial window size, in logical pixels, saturating at
    /// `u32::MAX`.
    pub fn window_size(&self) -> (u32, u32) {
        let side = |cells: usize| {
            u32::try_from(cells)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.cell_size)
        };
        (side(self.width), side(self.height))
    }
}

fn parse_var<T: FromStr>(var: impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let value = var(name)?;
    match value.trim().parse() {
        Ok(x) => Some(x),
        Err(_) => {
            warn!("Ignoring invalid value {:?} for {}", value, name);
            None
        }
    }
}
