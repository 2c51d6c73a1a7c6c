//! Integration tests for the inbound-message and restart pipelines
//!
//! Drives the game systems in a headless Bevy application: inbound wire
//! messages mutate the session, terminal sentinels end the game, and restart
//! requests reset the session and emit the role announcement token.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use wirechess::core::GameState;
use wirechess::game::events::{InboundWire, OutboundWire, RestartRequested};
use wirechess::game::resources::ActiveGame;
use wirechess::game::systems::{apply_inbound_messages, handle_restart_requests};
use wirechess_core::{GameSession, Piece, PieceKind, PlayerRole, Side, Square};

/// Collects everything the game layer queues for the server
#[derive(Resource, Default, Debug)]
struct SentToServer(Vec<String>);

fn collect_outbound(mut reader: MessageReader<OutboundWire>, mut sent: ResMut<SentToServer>) {
    for message in reader.read() {
        sent.0.push(message.0.clone());
    }
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_state::<GameState>();
    app.init_resource::<ActiveGame>();
    app.init_resource::<SentToServer>();
    app.add_message::<InboundWire>();
    app.add_message::<OutboundWire>();
    app.add_message::<RestartRequested>();
    app.add_systems(
        Update,
        (
            apply_inbound_messages,
            handle_restart_requests,
            collect_outbound,
        )
            .chain(),
    );
    app
}

fn send_inbound(app: &mut App, text: &str) {
    app.world_mut()
        .resource_mut::<Messages<InboundWire>>()
        .write(InboundWire(text.to_owned()));
}

fn piece_at(app: &App, name: &str) -> Option<Piece> {
    let game = app.world().resource::<ActiveGame>();
    game.session
        .board()
        .get(Square::from_name(name).unwrap())
        .unwrap()
}

#[test]
fn test_inbound_move_mutates_the_board() {
    let mut app = test_app();

    send_inbound(&mut app, "e2e4");
    app.update();

    assert_eq!(piece_at(&app, "e2"), None);
    assert_eq!(
        piece_at(&app, "e4"),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
    let game = app.world().resource::<ActiveGame>();
    assert_eq!(game.session.side_to_move(), Side::Black);
    assert_eq!(
        game.session.last_move(),
        Some((Square::new(4, 1), Square::new(4, 3)))
    );
}

#[test]
fn test_terminal_signal_ends_the_game() {
    let mut app = test_app();

    send_inbound(&mut app, "white wins");
    app.update();
    // The state set during the first update applies on the next transition.
    app.update();

    let game = app.world().resource::<ActiveGame>();
    assert!(!game.session.is_playing());

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::GameOver);
}

#[test]
fn test_corrupt_message_leaves_session_untouched() {
    let mut app = test_app();

    send_inbound(&mut app, "not a move");
    app.update();

    let game = app.world().resource::<ActiveGame>();
    assert_eq!(game.session.board(), GameSession::default().board());
    assert_eq!(game.session.side_to_move(), Side::White);
    assert!(game.session.is_playing());
}

#[test]
fn test_restart_announces_role_and_resets() {
    let mut app = test_app();

    send_inbound(&mut app, "e2e4");
    app.update();

    app.world_mut()
        .resource_mut::<Messages<RestartRequested>>()
        .write(RestartRequested(PlayerRole::Black));
    app.update();

    let sent = app.world().resource::<SentToServer>();
    assert_eq!(sent.0, vec!["black".to_owned()]);

    let game = app.world().resource::<ActiveGame>();
    assert_eq!(game.session.board(), GameSession::default().board());
    assert_eq!(game.session.role(), PlayerRole::Black);
    assert_eq!(game.session.last_move(), None);
}

#[test]
fn test_restart_after_game_over_returns_to_playing() {
    let mut app = test_app();

    send_inbound(&mut app, "draw");
    app.update();
    app.update();
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::GameOver
    );

    app.world_mut()
        .resource_mut::<Messages<RestartRequested>>()
        .write(RestartRequested(PlayerRole::White));
    app.update();
    app.update();

    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
    let game = app.world().resource::<ActiveGame>();
    assert!(game.session.is_playing());
}

#[test]
fn test_full_exchange_applies_both_sides_moves() {
    let mut app = test_app();

    // The server echoes the local move, then relays the opponent's reply.
    send_inbound(&mut app, "g1f3");
    app.update();
    send_inbound(&mut app, "b8c6");
    app.update();

    assert_eq!(
        piece_at(&app, "f3"),
        Some(Piece::new(Side::White, PieceKind::Knight))
    );
    assert_eq!(
        piece_at(&app, "c6"),
        Some(Piece::new(Side::Black, PieceKind::Knight))
    );
    let game = app.world().resource::<ActiveGame>();
    assert_eq!(game.session.side_to_move(), Side::White);
}
