use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GridSize;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Why the last run ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Side effects of one tick, consumed by the audio layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Eaten,
    GameOver(DeathReason),
}

/// Score and cause of the most recently finished run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunSummary {
    pub score: u32,
    pub reason: DeathReason,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct Game {
    snake: Snake,
    food: Food,
    score: u32,
    running: bool,
    last_run: Option<RunSummary>,
    bounds: GridSize,
    rng: StdRng,
}

impl Game {
    /// Creates a running game whose food placement draws on OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::spawn(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            running: true,
            last_run: None,
            bounds,
            rng,
        }
    }

    /// Advances the simulation by one tick and returns what happened.
    ///
    /// Does nothing while the game is over.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        self.snake.advance();
        let head = self.snake.head();

        if head == self.food.position() {
            let next = self.food.relocate(&mut self.rng, self.bounds, &self.snake);
            self.snake.request_growth();
            self.score += 1;
            debug!(
                "food eaten at {head:?}, score {}, next food at {next:?}",
                self.score
            );
            events.push(GameEvent::Eaten);
        }

        if !head.is_within_bounds(self.bounds) {
            events.push(self.game_over(DeathReason::WallCollision));
        }

        if self.snake.head_overlaps_body() {
            events.push(self.game_over(DeathReason::SelfCollision));
        }

        events
    }

    /// Requests a turn from player input.
    ///
    /// A reversal of the current direction is ignored. Any accepted turn also
    /// resumes a finished game, which is the only way to start the next run.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.snake.set_direction(direction) {
            debug!(
                "rejected turn {direction:?} while heading {:?}",
                self.snake.direction()
            );
            return false;
        }

        self.running = true;
        true
    }

    fn game_over(&mut self, reason: DeathReason) -> GameEvent {
        debug!("game over: {reason:?} with score {}", self.score);

        self.last_run = Some(RunSummary {
            score: self.score,
            reason,
        });
        self.snake.reset();
        self.food.relocate(&mut self.rng, self.bounds, &self.snake);
        self.running = false;
        self.score = 0;

        GameEvent::GameOver(reason)
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    /// Places the food at `position`, bypassing random placement.
    pub fn set_food_position(&mut self, position: Cell) {
        self.food.set_position(position);
    }

    /// Replaces the snake, keeping the rest of the session.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the summary of the last run that ended, if any.
    #[must_use]
    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GRID;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::{DeathReason, Game, GameEvent, RunSummary};

    fn start_body() -> Vec<Cell> {
        Snake::new().segments().copied().collect()
    }

    #[test]
    fn new_game_starts_running_with_food_off_the_snake() {
        let game = Game::new_with_seed(GRID, 1);

        assert!(game.is_running());
        assert_eq!(game.score(), 0);
        assert!(!game.snake().occupies(game.food().position()));
    }

    #[test]
    fn eating_food_scores_and_grows_on_next_tick() {
        let mut game = Game::new_with_seed(GRID, 4);
        game.set_food_position(Cell { x: 7, y: 9 });

        let events = game.tick();

        assert_eq!(events, vec![GameEvent::Eaten]);
        assert_eq!(game.score(), 1);
        assert_eq!(game.snake().len(), 3);
        assert!(!game.snake().occupies(game.food().position()));

        game.set_food_position(Cell { x: 0, y: 0 });
        game.tick();
        assert_eq!(game.snake().len(), 4);

        game.tick();
        assert_eq!(game.snake().len(), 4);
    }

    #[test]
    fn wall_collision_resets_the_run() {
        let mut game = Game::new_with_seed(GRID, 2);
        game.set_snake(Snake::from_segments(
            vec![
                Cell { x: 24, y: 9 },
                Cell { x: 23, y: 9 },
                Cell { x: 22, y: 9 },
            ],
            Direction::Right,
        ));
        game.set_food_position(Cell { x: 0, y: 0 });

        let events = game.tick();

        assert_eq!(events, vec![GameEvent::GameOver(DeathReason::WallCollision)]);
        assert_eq!(
            game.snake().segments().copied().collect::<Vec<_>>(),
            start_body()
        );
        assert_eq!(game.snake().direction(), Direction::Right);
        assert_eq!(game.score(), 0);
        assert!(!game.is_running());
        assert!(!game.snake().occupies(game.food().position()));
    }

    #[test]
    fn wall_collision_on_each_edge() {
        let cases = [
            (Cell { x: 0, y: 5 }, Direction::Left),
            (Cell { x: 24, y: 5 }, Direction::Right),
            (Cell { x: 2, y: 0 }, Direction::Up),
            (Cell { x: 2, y: 24 }, Direction::Down),
        ];

        for (head, direction) in cases {
            let mut game = Game::new_with_seed(GRID, 9);
            game.set_snake(Snake::from_segments(vec![head], direction));
            game.set_food_position(Cell { x: 12, y: 12 });

            let events = game.tick();

            assert_eq!(
                events,
                vec![GameEvent::GameOver(DeathReason::WallCollision)],
                "heading {direction:?} from {head:?}"
            );
        }
    }

    #[test]
    fn self_collision_sets_game_over() {
        let mut game = Game::new_with_seed(GRID, 3);
        game.set_snake(Snake::from_segments(
            vec![
                Cell { x: 2, y: 2 },
                Cell { x: 1, y: 2 },
                Cell { x: 1, y: 3 },
                Cell { x: 2, y: 3 },
                Cell { x: 3, y: 3 },
            ],
            Direction::Down,
        ));
        game.set_food_position(Cell { x: 20, y: 20 });
        game.score = 4;

        let events = game.tick();

        assert_eq!(events, vec![GameEvent::GameOver(DeathReason::SelfCollision)]);
        assert_eq!(
            game.last_run(),
            Some(RunSummary {
                score: 4,
                reason: DeathReason::SelfCollision,
            })
        );
        assert_eq!(game.score(), 0);
        assert!(!game.is_running());
    }

    #[test]
    fn four_long_snake_turning_back_hits_its_third_cell() {
        let mut game = Game::new_with_seed(GRID, 12);
        game.set_snake(Snake::from_segments(
            vec![
                Cell { x: 6, y: 9 },
                Cell { x: 5, y: 9 },
                Cell { x: 4, y: 9 },
                Cell { x: 3, y: 9 },
            ],
            Direction::Right,
        ));
        game.set_food_position(Cell { x: 20, y: 20 });
        game.score = 1;

        // Up then Left inside one tick points the head at the neck cell,
        // which is the third cell of the body once the head has moved.
        assert!(game.request_direction(Direction::Up));
        assert!(game.request_direction(Direction::Left));

        assert_eq!(
            game.tick(),
            vec![GameEvent::GameOver(DeathReason::SelfCollision)]
        );
        assert_eq!(
            game.last_run(),
            Some(RunSummary {
                score: 1,
                reason: DeathReason::SelfCollision,
            })
        );
        assert_eq!(game.snake().len(), 3);
        assert!(!game.is_running());
    }

    #[test]
    fn moving_into_the_vacated_tail_is_safe() {
        let square = vec![
            Cell { x: 2, y: 2 },
            Cell { x: 3, y: 2 },
            Cell { x: 3, y: 3 },
            Cell { x: 2, y: 3 },
        ];
        let mut game = Game::new_with_seed(GRID, 8);
        game.set_snake(Snake::from_segments(square.clone(), Direction::Down));
        game.set_food_position(Cell { x: 20, y: 20 });

        assert!(game.tick().is_empty());
        assert!(game.is_running());

        let mut growing = Snake::from_segments(square, Direction::Down);
        growing.request_growth();
        game.set_snake(growing);

        assert_eq!(
            game.tick(),
            vec![GameEvent::GameOver(DeathReason::SelfCollision)]
        );
    }

    #[test]
    fn two_turns_in_one_tick_can_reverse_into_the_neck() {
        let mut game = Game::new_with_seed(GRID, 10);
        game.set_food_position(Cell { x: 20, y: 20 });

        assert!(game.request_direction(Direction::Up));
        assert!(game.request_direction(Direction::Left));

        assert_eq!(
            game.tick(),
            vec![GameEvent::GameOver(DeathReason::SelfCollision)]
        );
    }

    #[test]
    fn tick_is_a_no_op_while_over() {
        let mut game = Game::new_with_seed(GRID, 5);
        game.running = false;
        let before: Vec<Cell> = game.snake().segments().copied().collect();

        assert!(game.tick().is_empty());
        assert_eq!(game.snake().segments().copied().collect::<Vec<_>>(), before);
    }

    #[test]
    fn reverse_request_is_ignored_and_does_not_resume() {
        let mut game = Game::new_with_seed(GRID, 6);
        game.running = false;

        assert!(!game.request_direction(Direction::Left));
        assert_eq!(game.snake().direction(), Direction::Right);
        assert!(!game.is_running());
    }

    #[test]
    fn accepted_turn_resumes_after_game_over() {
        let mut game = Game::new_with_seed(GRID, 7);
        game.running = false;

        assert!(game.request_direction(Direction::Up));
        assert!(game.is_running());

        game.tick();
        assert_eq!(game.snake().head(), Cell { x: 6, y: 8 });
    }
}
