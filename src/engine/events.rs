use serde::{Deserialize, Serialize};

use crate::game::grid::Position;
use crate::game::tile::TileKind;

/// Notification fired after a state transition. Consumers (UI glue, bots'
/// hosts, tests) subscribe to the bus or read the retained log; the engine
/// itself never depends on anyone listening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new player's turn began. Carries the seat index into the player
    /// list handed to `start_game`.
    PlayerChanged { seat: usize },
    TileDrawn { kind: TileKind },
    ScoreChanged {
        seat: usize,
        points: u32,
        total: u32,
    },
    RouteCompleted {
        tiles: Vec<Position>,
        length: usize,
        points: u32,
    },
    GameEnded { winner: usize },
    BotThinkingStarted,
    BotThinkingEnded,
}

type Subscriber = Box<dyn FnMut(&GameEvent)>;

/// Explicit listener list: the engine publishes here after each
/// transition, decoupled from any specific consumer. Events are also
/// retained in order for headless callers that poll instead of
/// subscribing.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
    log: Vec<GameEvent>,
}

impl EventBus {
    pub fn new() -> EventBus {
        EventBus::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn emit(&mut self, event: GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
        self.log.push(event);
    }

    /// Events emitted so far, oldest first.
    pub fn log(&self) -> &[GameEvent] {
        &self.log
    }

    /// Drains the retained log, handing ownership to the caller.
    pub fn take_log(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.log)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("log", &self.log)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_subscribers_see_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut bus = EventBus::new();
        bus.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        bus.emit(GameEvent::BotThinkingStarted);
        bus.emit(GameEvent::BotThinkingEnded);

        assert_eq!(
            *seen.borrow(),
            vec![GameEvent::BotThinkingStarted, GameEvent::BotThinkingEnded]
        );
    }

    #[test]
    fn test_take_log_drains() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::PlayerChanged { seat: 0 });

        assert_eq!(bus.take_log().len(), 1);
        assert!(bus.log().is_empty(), "draining should leave the log empty");
    }
}
