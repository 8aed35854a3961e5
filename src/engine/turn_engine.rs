use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::engine::config::{validate_player_count, GameConfig};
use crate::engine::events::{EventBus, GameEvent};
use crate::game::catalog::TileCatalog;
use crate::game::create_deck::create_deck;
use crate::game::deck::Deck;
use crate::game::grid::{Grid, Position};
use crate::game::player::{Player, PlayerColor, PlayerKind};
use crate::game::tile::{Rotation, TileShape};
use crate::routing::tracer::completed_routes;
use crate::scoring::score_table::mark_route_complete;
use crate::strategy::move_selection::BotMove;
use crate::{Result, RouteGameError};

/// Observable engine state. Validating, tracing, scoring and advancing are
/// transient steps inside `attempt_placement`; between calls the engine
/// always rests in one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Before `start_game` has dealt the first tile.
    AwaitingDraw,
    AwaitingPlacement,
    /// A bot decision is in flight; placement and rotation calls from the
    /// human side are rejected until it resolves.
    BotThinking,
    GameOver,
}

/// Result of a placement attempt. Rejection is ordinary control flow, not
/// an error: the engine state is untouched and the caller may try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed { routes_completed: usize, points: u32 },
    Rejected,
}

/// How a bot turn resolved: exactly one placement, or a pass when the tile
/// had no legal cell (the tile is discarded and play advances).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotTurnOutcome {
    Placed {
        position: Position,
        rotation: Rotation,
        points: u32,
    },
    Passed,
}

/// Owns the whole game: grid, deck, players, the active tile and the event
/// bus. All mutation funnels through here, one turn at a time; nothing is
/// shared across turns except what this struct holds.
pub struct TurnEngine {
    catalog: TileCatalog,
    config: GameConfig,
    grid: Grid,
    deck: Deck,
    players: Vec<Player>,
    current_seat: usize,
    current_tile: Option<TileShape>,
    current_rotation: Rotation,
    phase: TurnPhase,
    winner: Option<usize>,
    rng: StdRng,
    events: EventBus,
    pending_bot_move: Option<Option<BotMove>>,
}

impl TurnEngine {
    pub fn new(catalog: TileCatalog, config: GameConfig) -> TurnEngine {
        let rng = StdRng::seed_from_u64(config.seed);
        TurnEngine {
            catalog,
            config,
            grid: Grid::new(),
            deck: Deck { tiles: Vec::new() },
            players: Vec::new(),
            current_seat: 0,
            current_tile: None,
            current_rotation: Rotation::IDENTITY,
            phase: TurnPhase::AwaitingDraw,
            winner: None,
            rng,
            events: EventBus::new(),
            pending_bot_move: None,
        }
    }

    // ------------------------------------------------------------------
    // Game lifecycle
    // ------------------------------------------------------------------

    /// Resets grid, deck and scores, places the configured start tile,
    /// draws the first tile and hands the turn to seat 0.
    pub fn start_game(&mut self, seats: &[(&str, PlayerKind)]) -> Result<()> {
        validate_player_count(seats.len())?;

        self.players = seats
            .iter()
            .enumerate()
            .map(|(seat, &(name, kind))| Player::new(name, PlayerColor::for_seat(seat), kind))
            .collect();

        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.grid = Grid::new();
        self.deck = create_deck(&self.catalog, &self.config.deck, &mut self.rng)?;
        self.current_seat = 0;
        self.current_rotation = Rotation::IDENTITY;
        self.winner = None;
        self.pending_bot_move = None;
        self.phase = TurnPhase::AwaitingPlacement;

        if let Some((kind, position)) = self.config.start_tile {
            let shape = self.catalog.shape(kind)?;
            self.grid
                .place(shape, position, Rotation::IDENTITY, None)?;
            log::info!("start tile {:?} placed at {:?}", kind, position);
        }

        self.draw_tile();
        if self.phase != TurnPhase::GameOver {
            self.events.emit(GameEvent::PlayerChanged { seat: 0 });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Human-side actions
    // ------------------------------------------------------------------

    /// Quarter turn clockwise. Silently ignored unless it is the acting
    /// player's moment to act (not while a bot decision is in flight, not
    /// after game over).
    pub fn rotate_clockwise(&mut self) {
        if self.phase == TurnPhase::AwaitingPlacement && self.current_tile.is_some() {
            self.current_rotation = self.current_rotation.clockwise();
        }
    }

    pub fn rotate_counter_clockwise(&mut self) {
        if self.phase == TurnPhase::AwaitingPlacement && self.current_tile.is_some() {
            self.current_rotation = self.current_rotation.counter_clockwise();
        }
    }

    /// Validates and commits a placement of the active tile, then traces,
    /// scores, and advances the turn. On rejection nothing changes.
    pub fn attempt_placement(&mut self, position: Position, rotation: Rotation) -> PlacementOutcome {
        if self.phase != TurnPhase::AwaitingPlacement {
            return PlacementOutcome::Rejected;
        }
        let Some(shape) = self.current_tile else {
            return PlacementOutcome::Rejected;
        };
        if !self.grid.can_place(&shape, position, rotation) {
            log::debug!(
                "placement of {:?} at {:?} rotation {:?} rejected",
                shape.kind(),
                position,
                rotation
            );
            return PlacementOutcome::Rejected;
        }

        let (routes_completed, points) = self.commit_placement(shape, position, rotation);
        PlacementOutcome::Placed {
            routes_completed,
            points,
        }
    }

    // ------------------------------------------------------------------
    // Bot turn window
    // ------------------------------------------------------------------

    pub fn is_bot_turn(&self) -> bool {
        self.players
            .get(self.current_seat)
            .is_some_and(|player| player.kind() == PlayerKind::Bot)
    }

    pub fn is_thinking(&self) -> bool {
        self.phase == TurnPhase::BotThinking
    }

    /// Opens the bot's thinking window: the decision is computed and stored
    /// now, human actions are shut out until `finish_bot_turn`. There is no
    /// cancellation; the decision always resolves into exactly one
    /// placement or a pass. The wall-clock delay between the two calls is
    /// the caller's concern.
    pub fn begin_bot_turn(&mut self) -> Result<()> {
        if self.phase != TurnPhase::AwaitingPlacement {
            return Err(RouteGameError::InvalidPhase("begin_bot_turn"));
        }
        if !self.is_bot_turn() {
            return Err(RouteGameError::NotBotTurn);
        }
        let Some(shape) = self.current_tile else {
            return Err(RouteGameError::InvalidPhase("begin_bot_turn"));
        };

        self.phase = TurnPhase::BotThinking;
        self.events.emit(GameEvent::BotThinkingStarted);

        let strategy = self.config.bot_strategy.build();
        let decision = strategy.select_move(&self.grid, &shape, &mut self.rng);
        log::debug!("bot ({}) decided {:?}", strategy.name(), decision);
        self.pending_bot_move = Some(decision);
        Ok(())
    }

    /// Resolves the stored bot decision and applies it.
    pub fn finish_bot_turn(&mut self) -> Result<BotTurnOutcome> {
        if self.phase != TurnPhase::BotThinking {
            return Err(RouteGameError::InvalidPhase("finish_bot_turn"));
        }
        let decision = self
            .pending_bot_move
            .take()
            .ok_or(RouteGameError::InvalidPhase("finish_bot_turn"))?;

        self.events.emit(GameEvent::BotThinkingEnded);
        self.phase = TurnPhase::AwaitingPlacement;

        match decision {
            Some((position, rotation)) => {
                let shape = self
                    .current_tile
                    .ok_or(RouteGameError::InvalidPhase("finish_bot_turn"))?;
                let (_, points) = self.commit_placement(shape, position, rotation);
                Ok(BotTurnOutcome::Placed {
                    position,
                    rotation,
                    points,
                })
            }
            None => {
                // No legal cell anywhere for this tile: the bot passes, the
                // tile is discarded and play moves on. Deck exhaustion, not
                // this, ends the game.
                log::warn!(
                    "bot has no legal move for {:?}; passing",
                    self.current_tile.map(|t| t.kind())
                );
                self.current_tile = None;
                self.advance_turn();
                Ok(BotTurnOutcome::Passed)
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_seat(&self) -> usize {
        self.current_seat
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_seat)
    }

    pub fn current_tile(&self) -> Option<&TileShape> {
        self.current_tile.as_ref()
    }

    pub fn current_rotation(&self) -> Rotation {
        self.current_rotation
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// Winning seat once the game is over; ties go to the earliest seat in
    /// join order.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameEvent) + 'static) {
        self.events.subscribe(subscriber);
    }

    pub fn events(&self) -> &[GameEvent] {
        self.events.log()
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.take_log()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Commit path shared by human and bot placements. `can_place` has
    /// already passed; from here the turn always advances.
    fn commit_placement(
        &mut self,
        shape: TileShape,
        position: Position,
        rotation: Rotation,
    ) -> (usize, u32) {
        let owner = self
            .players
            .get(self.current_seat)
            .map(|player| player.color());
        // Occupancy was just validated; a failure here would mean the grid
        // changed mid-turn, which the single-turn model rules out.
        if self.grid.place(shape, position, rotation, owner).is_err() {
            return (0, 0);
        }
        log::info!(
            "seat {} placed {:?} at {:?} rotation {:?}",
            self.current_seat,
            shape.kind(),
            position,
            rotation
        );
        self.current_tile = None;

        let routes = completed_routes(&self.grid, position);
        let routes_completed = routes.len();
        let mut total_points = 0;

        for route in routes {
            let points = self.config.score_table.score_route(&route);
            if points > 0 {
                let player = &mut self.players[self.current_seat];
                player.add_score(points);
                total_points += points;
                let total = player.score();
                self.events.emit(GameEvent::ScoreChanged {
                    seat: self.current_seat,
                    points,
                    total,
                });
            }
            mark_route_complete(&mut self.grid, &route);
            self.events.emit(GameEvent::RouteCompleted {
                tiles: route.tiles().to_vec(),
                length: route.len(),
                points,
            });
        }

        self.advance_turn();
        (routes_completed, total_points)
    }

    fn advance_turn(&mut self) {
        self.current_seat = (self.current_seat + 1) % self.players.len();
        self.draw_tile();
        if self.phase != TurnPhase::GameOver {
            self.events.emit(GameEvent::PlayerChanged {
                seat: self.current_seat,
            });
        }
    }

    fn draw_tile(&mut self) {
        self.current_rotation = Rotation::IDENTITY;
        match self.deck.draw() {
            Some(shape) => {
                log::info!(
                    "seat {} drew {:?} ({} left)",
                    self.current_seat,
                    shape.kind(),
                    self.deck.remaining()
                );
                self.current_tile = Some(shape);
                self.phase = TurnPhase::AwaitingPlacement;
                self.events.emit(GameEvent::TileDrawn { kind: shape.kind() });
            }
            None => self.end_game(),
        }
    }

    fn end_game(&mut self) {
        self.current_tile = None;
        self.phase = TurnPhase::GameOver;

        // Strictly-greater comparison keeps the earliest seat on ties.
        let mut winner = 0;
        for (seat, player) in self.players.iter().enumerate() {
            if player.score() > self.players[winner].score() {
                winner = seat;
            }
        }
        self.winner = Some(winner);

        log::info!(
            "game over; winner is seat {} ({})",
            winner,
            self.players[winner].name()
        );
        self.events.emit(GameEvent::GameEnded { winner });
    }
}
