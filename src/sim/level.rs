//! Endless obstacle field
//!
//! The field holds a contiguous window of walls ordered bottom to top. Each
//! tick everything scrolls down together; walls that fall out of the visible
//! frame are dropped from the front and replaced by a freshly generated wall
//! at the back, so the window length never changes after construction.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ObstacleKind};
use crate::config::LevelConfig;
use crate::consts::VISIBLE_SPAN;
use crate::error::LevelError;

/// Read-only snapshot handed to the rendering collaborator
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Live walls, bottom to top
    pub obstacles: &'a VecDeque<Obstacle>,
    pub gap_width: f32,
    pub side_wall_width: f32,
    pub plane_pos_y: f32,
    /// Horizontal plane position (for background shading)
    pub player_x: f32,
    pub mileage: f32,
}

/// Scrolling window of procedurally generated walls
#[derive(Debug, Clone)]
pub struct ObstacleField<R = Pcg32> {
    config: LevelConfig,
    /// Live walls, ordered by increasing vertical position
    obstacles: VecDeque<Obstacle>,
    rng: R,
    /// Total distance scrolled this session
    mileage: f32,
}

impl ObstacleField<Pcg32> {
    /// Create a field whose obstacle sequence is fully determined by `seed`
    pub fn from_seed(config: LevelConfig, seed: u64) -> Result<Self, LevelError> {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> ObstacleField<R> {
    /// Validate the config, place the opening slit wall, then generate until
    /// the window spans a full visible frame beyond it.
    pub fn new(config: LevelConfig, rng: R) -> Result<Self, LevelError> {
        config.validate()?;

        let seed_wall = Obstacle::new(
            ObstacleKind::SlitWall,
            0.5 - config.gap_width / 2.0,
            config.initial_height,
            1.0,
        );
        let mut field = Self {
            config,
            obstacles: VecDeque::from([seed_wall]),
            rng,
            mileage: 0.0,
        };

        while field.span() < VISIBLE_SPAN {
            field.generate_next();
        }

        log::info!(
            "Obstacle field ready: {} walls, interval {}",
            field.obstacles.len(),
            field.config.barrier_interval
        );
        Ok(field)
    }

    /// Append one wall after the current tail.
    ///
    /// The next kind and gap position depend only on the tail's kind:
    ///
    /// | tail      | next kind                  | gap offset          |
    /// |-----------|----------------------------|---------------------|
    /// | LeftWall  | RightWall or SlitWall      | u                   |
    /// | RightWall | LeftWall or SlitWall       | 1 - u               |
    /// | SlitWall  | any of the three           | u - gap_width / 2   |
    ///
    /// where `u` is uniform over `gap_range`. A side wall is never followed by
    /// another wall on the same side.
    fn generate_next(&mut self) {
        let tail = self
            .obstacles
            .back()
            .expect("obstacle window is never empty");
        let tail_kind = tail.kind;
        let vertical_position = tail.vertical_position + self.config.barrier_interval;

        let kind = match tail_kind {
            ObstacleKind::LeftWall => {
                if self.rng.random_bool(0.5) {
                    ObstacleKind::RightWall
                } else {
                    ObstacleKind::SlitWall
                }
            }
            ObstacleKind::RightWall => {
                if self.rng.random_bool(0.5) {
                    ObstacleKind::LeftWall
                } else {
                    ObstacleKind::SlitWall
                }
            }
            ObstacleKind::SlitWall => match self.rng.random_range(0..3) {
                0 => ObstacleKind::LeftWall,
                1 => ObstacleKind::RightWall,
                _ => ObstacleKind::SlitWall,
            },
        };

        let (lo, hi) = self.config.gap_range;
        let u = self.rng.random_range(lo..=hi);
        let gap_offset = match tail_kind {
            ObstacleKind::LeftWall => u,
            ObstacleKind::RightWall => 1.0 - u,
            ObstacleKind::SlitWall => u - self.config.gap_width / 2.0,
        };

        let height = self.config.height_at(self.mileage);
        log::debug!(
            "Generated {:?} at y={:.3} (gap {:.3}, height {:.3})",
            kind,
            vertical_position,
            gap_offset,
            height
        );
        self.obstacles
            .push_back(Obstacle::new(kind, gap_offset, height, vertical_position));
    }

    /// Scroll the field down by `distance`.
    ///
    /// Walls whose top edge reaches the bottom of the frame are evicted, each
    /// paired with exactly one newly generated wall. Returns the number of
    /// evictions. Distances must be finite, non-negative and no larger than
    /// one barrier interval; anything else is rejected without touching state.
    pub fn update(&mut self, distance: f32) -> Result<usize, LevelError> {
        if !distance.is_finite() || distance < 0.0 || distance > self.config.barrier_interval {
            log::warn!("Rejected scroll distance {}", distance);
            return Err(LevelError::InvalidScroll(distance));
        }

        self.mileage += distance;
        for obstacle in &mut self.obstacles {
            obstacle.vertical_position -= distance;
        }

        let mut evicted = 0;
        while self.obstacles.front().is_some_and(|o| o.top() <= 0.0) {
            self.obstacles.pop_front();
            self.generate_next();
            evicted += 1;
        }
        if evicted > 0 {
            log::debug!("Evicted {} wall(s) at mileage {:.3}", evicted, self.mileage);
        }

        Ok(evicted)
    }
}

impl<R> ObstacleField<R> {
    /// Check whether a plane at horizontal position `x` hits anything
    ///
    /// Side walls always count; otherwise a wall hits when its band covers
    /// the plane's fixed height and `x` is in its solid part.
    pub fn collides_at(&self, x: f32) -> Result<bool, LevelError> {
        if x.is_nan() {
            return Err(LevelError::InvalidPosition(x));
        }

        let config = &self.config;
        if x < config.side_wall_width || x > 1.0 - config.side_wall_width {
            return Ok(true);
        }

        Ok(self
            .obstacles
            .iter()
            .any(|o| o.contains_point(x, config.plane_pos_y, config.gap_width)))
    }

    /// Cumulative scroll distance
    pub fn mileage(&self) -> f32 {
        self.mileage
    }

    /// Live walls, bottom to top
    pub fn obstacles(&self) -> &VecDeque<Obstacle> {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// True once every wall has been evicted, which never happens after `new`
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// First wall whose top edge is still above `y`
    pub fn next_obstacle_above(&self, y: f32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.top() > y)
    }

    /// Snapshot for the rendering collaborator
    pub fn frame(&self, player_x: f32) -> Frame<'_> {
        Frame {
            obstacles: &self.obstacles,
            gap_width: self.config.gap_width,
            side_wall_width: self.config.side_wall_width,
            plane_pos_y: self.config.plane_pos_y,
            player_x,
            mileage: self.mileage,
        }
    }

    /// Vertical distance from the lowest wall to the highest
    fn span(&self) -> f32 {
        match (self.obstacles.front(), self.obstacles.back()) {
            (Some(front), Some(back)) => back.vertical_position - front.vertical_position,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn field(seed: u64) -> ObstacleField {
        ObstacleField::from_seed(LevelConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_initial_window() {
        let field = field(1);
        assert_eq!(field.len(), 3);
        assert!(!field.is_empty());
        assert_eq!(field.mileage(), 0.0);

        let seed_wall = &field.obstacles()[0];
        assert_eq!(seed_wall.kind, ObstacleKind::SlitWall);
        assert_eq!(seed_wall.gap_offset, 0.375);
        assert_eq!(seed_wall.height, INITIAL_HEIGHT);
        assert_eq!(seed_wall.vertical_position, 1.0);

        let positions: Vec<f32> = field.obstacles().iter().map(|o| o.vertical_position).collect();
        assert_eq!(positions, vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_invalid_config_aborts_construction() {
        let config = LevelConfig {
            gap_width: 1.0,
            ..Default::default()
        };
        let err = ObstacleField::from_seed(config, 1).unwrap_err();
        assert!(matches!(err, LevelError::Config(_)));
    }

    #[test]
    fn test_side_wall_collision() {
        let field = field(2);
        assert!(field.collides_at(0.05).unwrap());
        assert!(field.collides_at(0.95).unwrap());
        // Nothing spans the plane height yet
        assert!(!field.collides_at(0.5).unwrap());
        assert!(!field.collides_at(0.2).unwrap());
    }

    #[test]
    fn test_scroll_moves_everything() {
        let mut field = field(3);
        assert_eq!(field.update(0.5).unwrap(), 0);
        assert_eq!(field.obstacles()[0].vertical_position, 0.5);
        assert_eq!(field.mileage(), 0.5);
        assert_eq!(field.len(), 3);
        assert!(field.collides_at(0.05).unwrap());
        assert!(!field.collides_at(0.5).unwrap());
    }

    #[test]
    fn test_slit_hit_test() {
        let mut field = field(4);
        field.update(0.5).unwrap();
        field.update(0.35).unwrap();

        // Seed wall band now covers PLANE_POS_Y; its gap is [0.375, 0.625]
        let seed_wall = &field.obstacles()[0];
        assert!(seed_wall.spans(PLANE_POS_Y));
        assert!(!field.collides_at(0.5).unwrap());
        assert!(field.collides_at(0.3).unwrap());
        assert!(field.collides_at(0.7).unwrap());
    }

    #[test]
    fn test_eviction_pairs_with_generation() {
        let mut field = field(5);
        let tail_before = field.obstacles().back().unwrap().vertical_position;

        assert_eq!(field.update(0.5).unwrap(), 0);
        assert_eq!(field.update(0.5).unwrap(), 0);
        // Seed wall top lands exactly on the frame bottom
        assert_eq!(field.update(0.1).unwrap(), 1);

        assert_eq!(field.len(), 3);
        let front = &field.obstacles()[0];
        assert!((front.vertical_position - 0.4).abs() < EPS);
        let tail = field.obstacles().back().unwrap();
        assert!((tail.vertical_position - (tail_before - 1.1 + BARRIER_INTERVAL)).abs() < EPS);
    }

    #[test]
    fn test_rejects_bad_scroll() {
        let mut field = field(6);
        let before = field.obstacles().clone();

        assert!(matches!(field.update(-0.1), Err(LevelError::InvalidScroll(_))));
        assert!(matches!(field.update(f32::NAN), Err(LevelError::InvalidScroll(_))));
        assert!(matches!(field.update(f32::INFINITY), Err(LevelError::InvalidScroll(_))));
        assert!(matches!(field.update(0.6), Err(LevelError::InvalidScroll(_))));

        assert_eq!(field.obstacles(), &before);
        assert_eq!(field.mileage(), 0.0);
    }

    #[test]
    fn test_zero_scroll_is_noop() {
        let mut field = field(7);
        let before = field.obstacles().clone();
        assert_eq!(field.update(0.0).unwrap(), 0);
        assert_eq!(field.obstacles(), &before);
    }

    #[test]
    fn test_rejects_nan_position() {
        let field = field(8);
        assert!(matches!(field.collides_at(f32::NAN), Err(LevelError::InvalidPosition(_))));
    }

    #[test]
    fn test_transition_table() {
        for seed in 0..20 {
            let mut field = field(seed);
            for _ in 0..200 {
                let tail = field.obstacles().back().unwrap().clone();
                field.generate_next();
                let next = field.obstacles().back().unwrap();

                match tail.kind {
                    ObstacleKind::LeftWall => {
                        assert_ne!(next.kind, ObstacleKind::LeftWall);
                        assert!((0.4..=0.6).contains(&next.gap_offset));
                    }
                    ObstacleKind::RightWall => {
                        assert_ne!(next.kind, ObstacleKind::RightWall);
                        assert!((0.4 - EPS..=0.6 + EPS).contains(&next.gap_offset));
                    }
                    ObstacleKind::SlitWall => {
                        let lo = 0.4 - GAP_WIDTH / 2.0 - EPS;
                        let hi = 0.6 - GAP_WIDTH / 2.0 + EPS;
                        assert!((lo..=hi).contains(&next.gap_offset));
                    }
                }
                assert_eq!(
                    next.vertical_position,
                    tail.vertical_position + BARRIER_INTERVAL
                );
            }
        }
    }

    #[test]
    fn test_every_kind_follows_slit() {
        let mut field = field(9);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let tail_kind = field.obstacles().back().unwrap().kind;
            field.generate_next();
            if tail_kind == ObstacleKind::SlitWall {
                let idx = match field.obstacles().back().unwrap().kind {
                    ObstacleKind::LeftWall => 0,
                    ObstacleKind::RightWall => 1,
                    ObstacleKind::SlitWall => 2,
                };
                seen[idx] = true;
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_height_ramps_with_mileage() {
        let mut field = field(10);
        field.mileage = 50.0;
        field.generate_next();
        assert!((field.obstacles().back().unwrap().height - 0.2).abs() < 1e-6);

        field.mileage = 500.0;
        field.generate_next();
        assert_eq!(field.obstacles().back().unwrap().height, MAX_HEIGHT);
    }

    #[test]
    fn test_deterministic_replay() {
        let mut a = field(42);
        let mut b = field(42);
        for _ in 0..100 {
            a.generate_next();
            b.generate_next();
        }
        assert_eq!(a.obstacles(), b.obstacles());

        let mut c = field(43);
        for _ in 0..100 {
            c.generate_next();
        }
        assert_ne!(a.obstacles(), c.obstacles());
    }

    #[test]
    fn test_next_obstacle_above() {
        let mut field = field(11);
        field.update(0.5).unwrap();
        field.update(0.35).unwrap();
        // Seed wall spans the plane, so it is still ahead of it
        let next = field.next_obstacle_above(PLANE_POS_Y).unwrap();
        assert_eq!(next.gap_offset, 0.375);

        field.update(0.2).unwrap();
        let next = field.next_obstacle_above(PLANE_POS_Y).unwrap();
        assert!((next.vertical_position - 0.45).abs() < EPS);
    }

    #[test]
    fn test_frame_snapshot() {
        let field = field(12);
        let frame = field.frame(0.4);
        assert_eq!(frame.obstacles.len(), 3);
        assert_eq!(frame.player_x, 0.4);
        assert_eq!(frame.gap_width, GAP_WIDTH);
    }

    proptest! {
        #[test]
        fn prop_window_invariants(
            seed in any::<u64>(),
            scrolls in prop::collection::vec(0.0f32..=0.5, 1..300),
        ) {
            let mut field = field(seed);
            let len = field.len();
            let mut last_height = field.obstacles().back().unwrap().height;
            let mut total = 0.0f32;

            for scroll in scrolls {
                field.update(scroll).unwrap();
                total += scroll;

                // Window length never changes after construction
                prop_assert_eq!(field.len(), len);

                let obstacles = field.obstacles();
                for pair in obstacles.iter().zip(obstacles.iter().skip(1)) {
                    let gap = pair.1.vertical_position - pair.0.vertical_position;
                    prop_assert!((gap - BARRIER_INTERVAL).abs() < 1e-3);
                }

                // Nothing left below the frame, and the top of the frame is covered
                prop_assert!(obstacles.front().unwrap().top() > 0.0);
                prop_assert!(obstacles.back().unwrap().top() >= VISIBLE_SPAN - 1e-3);

                let tail_height = obstacles.back().unwrap().height;
                prop_assert!(tail_height >= last_height);
                prop_assert!(tail_height <= MAX_HEIGHT);
                last_height = tail_height;
            }

            prop_assert!((field.mileage() - total).abs() < 1e-2);
        }

        #[test]
        fn prop_side_walls_always_collide(seed in any::<u64>(), x in 0.0f32..SIDE_WALL_WIDTH) {
            let field = field(seed);
            prop_assert!(field.collides_at(x).unwrap());
            prop_assert!(field.collides_at(1.0 - x / 2.0).unwrap());
        }
    }
}
