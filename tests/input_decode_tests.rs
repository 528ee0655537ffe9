//! Input decode tests - byte stream to commands through the facade

use duel_tetris::input::{InputDecoder, KeyBindings};
use duel_tetris::types::{Command, PlayerAction, PlayerId, CTRL_C, ESC};

#[test]
fn test_escape_up_versus_literal_a() {
    let mut decoder = InputDecoder::default();

    let up = decoder.decode_all(&[ESC, b'[', b'A']);
    assert_eq!(up.as_slice(), &[Command::Player(PlayerId::One, PlayerAction::Rotate)]);

    let drop = decoder.decode_all(b"a");
    assert_eq!(drop.as_slice(), &[Command::Player(PlayerId::One, PlayerAction::HardDrop)]);
}

#[test]
fn test_mixed_burst() {
    let mut decoder = InputDecoder::default();
    let commands = decoder.decode_all(&[b'D', b'6', ESC, b'[', b'C', b'x', b'N', CTRL_C]);
    assert_eq!(
        commands.as_slice(),
        &[
            Command::Player(PlayerId::One, PlayerAction::MoveLeft),
            Command::Player(PlayerId::Two, PlayerAction::MoveRight),
            Command::Player(PlayerId::One, PlayerAction::MoveRight),
            Command::TogglePreview,
            Command::Quit,
        ]
    );
}

#[test]
fn test_arrows_can_be_routed_to_player_two() {
    let bindings = KeyBindings {
        arrows: Some(PlayerId::Two),
        ..KeyBindings::default()
    };
    let mut decoder = InputDecoder::new(bindings);
    let commands = decoder.decode_all(&[ESC, b'[', b'B']);
    assert_eq!(
        commands.as_slice(),
        &[Command::Player(PlayerId::Two, PlayerAction::SoftDrop)]
    );
}
