//! A toy minigame screen for exercising agents without a game client.
//!
//! One marine, one beacon, and optionally a handful of stationary hostiles on
//! a square screen.  The marine must be selected before it can be moved or
//! ordered to attack.  Touching the beacon scores 1 and respawns it; attacking
//! a hostile in range removes it and scores 1.

use bot_core::{Faction, FunctionCall, FunctionId, Point, PolicyRng, function};
use bot_observe::{Layer, Observation, Raster, TimeStep};
use bot_run::{Environment, RunError, RunResult};
use tracing::trace;

/// Beacon half-width: the beacon covers `(2r+1)²` cells.
const BEACON_RADIUS: i32 = 1;
/// Cells the marine moves per tick.
const MARINE_SPEED:  i32 = 2;
/// Attack reach in cells (Chebyshev).
const ATTACK_RANGE:  i32 = 3;

#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    pub size:        i32,
    pub hostiles:    usize,
    /// Ticks per episode, counting the first step.
    pub episode_len: u64,
}

pub struct GridWorld {
    config:   GridConfig,
    rng:      PolicyRng,
    marine:   Point,
    beacon:   Point,
    hostiles: Vec<Point>,
    selected: bool,
    tick:     u64,
    started:  bool,
}

impl GridWorld {
    pub fn new(config: GridConfig, rng: PolicyRng) -> RunResult<Self> {
        if config.size < 2 * BEACON_RADIUS + 2 {
            return Err(RunError::Config(format!("screen size {} is too small", config.size)));
        }
        if config.episode_len < 2 {
            return Err(RunError::Config("episodes need at least 2 ticks".into()));
        }
        Ok(Self {
            config,
            rng,
            marine:   Point::default(),
            beacon:   Point::default(),
            hostiles: Vec::new(),
            selected: false,
            tick:     0,
            started:  false,
        })
    }

    fn random_cell(&mut self, margin: i32) -> Point {
        let hi = self.config.size - margin;
        Point::new(self.rng.gen_range(margin..hi), self.rng.gen_range(margin..hi))
    }

    fn touches_beacon(&self) -> bool {
        chebyshev(self.marine, self.beacon) <= BEACON_RADIUS
    }

    fn apply(&mut self, action: &FunctionCall) -> f32 {
        let legal = self.available();
        if !legal.contains(&action.function) {
            trace!(%action, "illegal action ignored");
            return 0.0;
        }
        match action.function {
            function::SELECT_ARMY | function::SELECT_POINT => {
                self.selected = true;
                0.0
            }
            function::MOVE_SCREEN => {
                if let Some(target) = action.target() {
                    self.marine = step_toward(self.marine, target, MARINE_SPEED);
                }
                0.0
            }
            function::ATTACK_SCREEN => {
                let Some(target) = action.target() else { return 0.0 };
                match self.hostiles.iter().position(|&h| h == target) {
                    Some(i) if chebyshev(self.marine, target) <= ATTACK_RANGE => {
                        self.hostiles.swap_remove(i);
                        1.0
                    }
                    _ => {
                        self.marine = step_toward(self.marine, target, MARINE_SPEED);
                        0.0
                    }
                }
            }
            _ => 0.0,
        }
    }

    fn available(&self) -> Vec<FunctionId> {
        let mut ids = vec![function::NO_OP, function::SELECT_ARMY, function::SELECT_POINT];
        if self.selected {
            ids.extend([function::MOVE_SCREEN, function::ATTACK_SCREEN]);
        }
        ids
    }

    fn observe(&self) -> Observation {
        let size = self.config.size as usize;
        let mut relative = Raster::zeros(size, size);
        for dy in -BEACON_RADIUS..=BEACON_RADIUS {
            for dx in -BEACON_RADIUS..=BEACON_RADIUS {
                let p = Point::new(self.beacon.x + dx, self.beacon.y + dy);
                relative.set(p, Faction::Neutral.code() as u32);
            }
        }
        for &h in &self.hostiles {
            relative.set(h, Faction::Hostile.code() as u32);
        }
        relative.set(self.marine, Faction::Own.code() as u32);

        let mut selected = Raster::zeros(size, size);
        if self.selected {
            selected.set(self.marine, 1);
        }

        Observation::new()
            .with_available(self.available())
            .with_layer(Layer::PlayerRelative, relative)
            .with_layer(Layer::Selected, selected)
    }
}

impl Environment for GridWorld {
    fn reset(&mut self) -> RunResult<TimeStep> {
        self.marine = self.random_cell(0);
        self.beacon = self.random_cell(BEACON_RADIUS);
        let hostiles = (0..self.config.hostiles).map(|_| self.random_cell(0)).collect();
        self.hostiles = hostiles;
        self.selected = false;
        self.tick = 0;
        self.started = true;
        Ok(TimeStep::first(self.observe()))
    }

    fn step(&mut self, action: &FunctionCall) -> RunResult<TimeStep> {
        if !self.started {
            return Err(RunError::NotStarted);
        }
        if self.tick + 1 >= self.config.episode_len {
            return Err(RunError::EpisodeOver);
        }
        let mut reward = self.apply(action);
        if self.touches_beacon() {
            reward += 1.0;
            self.beacon = self.random_cell(BEACON_RADIUS);
        }
        self.tick += 1;

        let obs = self.observe();
        Ok(if self.tick + 1 == self.config.episode_len {
            TimeStep::last(obs, reward)
        } else {
            TimeStep::mid(obs, reward)
        })
    }
}

fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

fn step_toward(from: Point, to: Point, speed: i32) -> Point {
    Point::new(
        from.x + (to.x - from.x).clamp(-speed, speed),
        from.y + (to.y - from.y).clamp(-speed, speed),
    )
}
