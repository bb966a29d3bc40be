use std::collections::BTreeMap;

use serde::Deserialize;

use chess_board::board::{Board, BoardBuilder, BoardError, PieceKind, Square, Team};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    setup: Vec<Placement>,
    steps: Vec<Step>,
    #[serde(rename = "final")]
    final_cells: BTreeMap<String, Option<char>>,
    captured: Vec<String>,
}

#[derive(Deserialize)]
struct Placement {
    square: String,
    team: String,
    kind: char,
}

#[derive(Deserialize)]
struct Step {
    from: String,
    to: String,
    expect: String,
}

fn square(notation: &str) -> Square {
    notation.parse().expect("invalid square in scenarios.json")
}

fn team(name: &str) -> Team {
    match name {
        "White" => Team::White,
        "Black" => Team::Black,
        other => panic!("unknown team {other}"),
    }
}

fn kind(letter: char) -> PieceKind {
    PieceKind::from_char(letter).unwrap_or_else(|| panic!("unknown piece letter {letter}"))
}

fn outcome(result: &Result<chess_board::Move, BoardError>) -> &'static str {
    match result {
        Ok(mv) if mv.is_capture() => "capture",
        Ok(_) => "ok",
        Err(BoardError::OutOfBounds { .. }) => "OutOfBounds",
        Err(BoardError::EmptyCell { .. }) => "EmptyCell",
        Err(BoardError::OccupiedCell { .. }) => "OccupiedCell",
        Err(BoardError::IllegalMove { .. }) => "IllegalMove",
        Err(BoardError::InvalidSquare { .. }) => "InvalidSquare",
    }
}

fn build(scenario: &Scenario) -> Board {
    scenario
        .setup
        .iter()
        .fold(BoardBuilder::new(), |builder, p| {
            builder.piece(square(&p.square), team(&p.team), kind(p.kind))
        })
        .build()
        .expect("scenario setup should be on the board")
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());

    for scenario in &set.scenarios {
        let mut board = build(scenario);

        for step in &scenario.steps {
            let before = board.to_string();
            let result = board.move_piece(square(&step.from), square(&step.to));
            assert_eq!(
                outcome(&result),
                step.expect,
                "{}: {} -> {}",
                scenario.name,
                step.from,
                step.to
            );
            if result.is_err() {
                assert_eq!(
                    board.to_string(),
                    before,
                    "{}: failed move changed the board",
                    scenario.name
                );
            }
            assert_eq!(board.check_consistency(), Ok(()), "{}", scenario.name);
        }

        for (cell, expected) in &scenario.final_cells {
            let actual = board.piece_on(square(cell)).map(|p| p.symbol());
            assert_eq!(actual, *expected, "{}: cell {cell}", scenario.name);
        }

        let captured: Vec<String> = board.captured().map(|p| p.kind().to_string()).collect();
        assert_eq!(captured, scenario.captured, "{}: captured set", scenario.name);
    }
}
