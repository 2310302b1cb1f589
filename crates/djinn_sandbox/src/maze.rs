//! Percolation maze generator
//!
//! Each edge of a `width` × `height` grid is opened independently with
//! probability `edge_probability`. The largest connected cluster becomes the
//! maze, and the two sites furthest apart along open edges become its
//! entrance and exit. Grids are redrawn until that distance reaches
//! `min_path_length` or `max_attempts` runs out.
//!
//! Each side is clamped to `1..=MAX_SIDE` before sampling.

use djinn_core::math::DeterministicRng;
use djinn_script::{Entity, Script};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// Largest grid side [`generate`] will sample.
pub const MAX_SIDE: u32 = 512;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: u32,
    pub height: u32,
    pub edge_probability: f64,
    pub min_path_length: u32,
    pub max_attempts: u32,
    /// Fixed seed for reproducible mazes; wall-clock seconds when unset.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            edge_probability: 0.5,
            min_path_length: 20,
            max_attempts: 1000,
            seed: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Site {
    pub x: u32,
    pub y: u32,
}

impl Site {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One sampled grid with its chosen cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    width: u32,
    height: u32,
    // open edge between (x, y) and (x - 1, y)
    west: Vec<bool>,
    // open edge between (x, y) and (x, y - 1)
    south: Vec<bool>,
    cluster: Vec<Site>,
    entrance: Site,
    exit: Site,
    path_length: u32,
}

impl Maze {
    /// Sample every edge of a fresh grid, visiting sites column by column.
    fn sample(width: u32, height: u32, p: f64, rng: &mut DeterministicRng) -> Self {
        let sites = width as usize * height as usize;
        let mut maze = Self {
            width,
            height,
            west: vec![false; sites],
            south: vec![false; sites],
            cluster: Vec::new(),
            entrance: Site::default(),
            exit: Site::default(),
            path_length: 0,
        };
        for x in 0..width {
            for y in 0..height {
                let index = maze.index(Site::new(x, y));
                if x > 0 {
                    maze.west[index] = rng.chance(p);
                }
                if y > 0 {
                    maze.south[index] = rng.chance(p);
                }
            }
        }
        maze.select_cluster();
        maze
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sites of the largest connected cluster, sorted.
    pub fn cluster(&self) -> &[Site] {
        &self.cluster
    }

    pub fn entrance(&self) -> Site {
        self.entrance
    }

    pub fn exit(&self) -> Site {
        self.exit
    }

    /// Shortest-path distance between entrance and exit, in edges.
    pub fn path_length(&self) -> u32 {
        self.path_length
    }

    pub fn contains(&self, site: Site) -> bool {
        site.x < self.width && site.y < self.height
    }

    /// Whether the edge leaving `site` towards `direction` is open. Edges off
    /// the grid are always closed.
    pub fn is_open(&self, site: Site, direction: Direction) -> bool {
        if !self.contains(site) {
            return false;
        }
        match direction {
            Direction::West => site.x > 0 && self.west[self.index(site)],
            Direction::South => site.y > 0 && self.south[self.index(site)],
            Direction::East => {
                site.x + 1 < self.width && self.west[self.index(Site::new(site.x + 1, site.y))]
            }
            Direction::North => {
                site.y + 1 < self.height && self.south[self.index(Site::new(site.x, site.y + 1))]
            }
        }
    }

    pub fn neighbours(&self, site: Site) -> impl Iterator<Item = Site> + '_ {
        [Direction::East, Direction::North, Direction::West, Direction::South]
            .into_iter()
            .filter(move |direction| self.is_open(site, *direction))
            .map(move |direction| match direction {
                Direction::East => Site::new(site.x + 1, site.y),
                Direction::North => Site::new(site.x, site.y + 1),
                Direction::West => Site::new(site.x - 1, site.y),
                Direction::South => Site::new(site.x, site.y - 1),
            })
    }

    fn index(&self, site: Site) -> usize {
        site.y as usize * self.width as usize + site.x as usize
    }

    fn site(&self, index: usize) -> Site {
        let width = self.width as usize;
        Site::new((index % width) as u32, (index / width) as u32)
    }

    /// Breadth-first distances from `start`; `None` for unreachable sites.
    fn distances(&self, start: Site) -> Vec<Option<u32>> {
        let mut distances = vec![None; self.west.len()];
        let mut queue = VecDeque::from([start]);
        distances[self.index(start)] = Some(0);
        while let Some(site) = queue.pop_front() {
            let next = distances[self.index(site)].unwrap_or(0) + 1;
            for neighbour in self.neighbours(site) {
                let slot = &mut distances[self.index(neighbour)];
                if slot.is_none() {
                    *slot = Some(next);
                    queue.push_back(neighbour);
                }
            }
        }
        distances
    }

    fn select_cluster(&mut self) {
        let mut visited = vec![false; self.west.len()];
        let mut largest: Vec<Site> = Vec::new();
        for index in 0..visited.len() {
            if visited[index] {
                continue;
            }
            visited[index] = true;
            let mut cluster = vec![self.site(index)];
            let mut next = 0;
            while let Some(&site) = cluster.get(next) {
                next += 1;
                for neighbour in self.neighbours(site) {
                    let seen = &mut visited[self.index(neighbour)];
                    if !*seen {
                        *seen = true;
                        cluster.push(neighbour);
                    }
                }
            }
            if cluster.len() > largest.len() {
                largest = cluster;
            }
        }
        largest.sort();

        let mut best = (0, Site::default(), Site::default());
        for &start in &largest {
            for (index, distance) in self.distances(start).into_iter().enumerate() {
                if let Some(distance) = distance {
                    if distance > best.0 {
                        best = (distance, start, self.site(index));
                    }
                }
            }
        }
        if best.0 == 0 {
            let only = largest.first().copied().unwrap_or_default();
            best = (0, only, only);
        }

        self.cluster = largest;
        (self.path_length, self.entrance, self.exit) = best;
    }
}

/// Result of [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct MazeOutcome {
    pub maze: Maze,
    pub attempts: u32,
    /// `false` when `max_attempts` ran out first.
    pub reached_min_path: bool,
}

/// Redraw grids until the longest path meets the configured minimum.
/// Sides are clamped to `1..=MAX_SIDE`; a zero attempt count is raised to one.
pub fn generate(config: &MazeConfig, rng: &mut DeterministicRng) -> MazeOutcome {
    let width = config.width.clamp(1, MAX_SIDE);
    let height = config.height.clamp(1, MAX_SIDE);
    let max_attempts = config.max_attempts.max(1);

    let mut attempts = 0;
    loop {
        attempts += 1;
        let maze = Maze::sample(width, height, config.edge_probability, rng);
        let reached_min_path = maze.path_length >= config.min_path_length;
        if reached_min_path || attempts >= max_attempts {
            return MazeOutcome {
                maze,
                attempts,
                reached_min_path,
            };
        }
    }
}

/// Builds a maze when created and reports how many grids it took.
pub struct MazeGenerator {
    entity: Entity,
    config: MazeConfig,
    outcome: Option<MazeOutcome>,
}

impl MazeGenerator {
    pub const CLASS_NAME: &'static str = "Bud.Examples.MazeGenerator";

    pub fn new(entity: Entity, config: MazeConfig) -> Self {
        Self {
            entity,
            config,
            outcome: None,
        }
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.outcome.as_ref().map(|outcome| &outcome.maze)
    }

    pub fn attempts(&self) -> u32 {
        self.outcome.as_ref().map_or(0, |outcome| outcome.attempts)
    }

    fn seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default()
        })
    }
}

impl Script for MazeGenerator {
    fn on_create(&mut self) {
        let mut rng = DeterministicRng::new(self.seed());
        let outcome = generate(&self.config, &mut rng);

        let log = self.entity.log();
        log.info(&format!("Maze generation required {} attempts", outcome.attempts));
        if !outcome.reached_min_path {
            log.warn(&format!(
                "Maze path length {} is below the requested {}",
                outcome.maze.path_length(),
                self.config.min_path_length
            ));
        }
        self.outcome = Some(outcome);
    }
}
