use pursuit_core::{AgentKind, Position};
use pursuit_match::{
    BlockError, Level, MatchConfig, MatchError, MatchLoop, NoHuman, Outcome, ScanBlockProvider,
    ScriptedBlocks, TurnReport, TurnStatus,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn play(config: &MatchConfig) -> (MatchLoop, Vec<TurnReport>) {
    init_tracing();
    let mut game = MatchLoop::new(config).unwrap();
    let mut reports = Vec::new();
    game.run(&mut NoHuman, &mut ScanBlockProvider, |_, report| {
        reports.push(*report)
    })
    .unwrap();
    (game, reports)
}

#[test]
fn pursuer_corners_evader_on_open_board() {
    let config = MatchConfig {
        size: 3,
        pursuer: Position::new(0, 0),
        evader: Position::new(0, 2),
        goal: Position::new(2, 1),
        ..MatchConfig::default()
    };
    let (game, reports) = play(&config);

    assert_eq!(reports.len(), 3);
    assert_eq!(
        reports[0],
        TurnReport {
            turn: 1,
            pursuer: Position::new(1, 0),
            evader: Position::new(1, 2),
            status: TurnStatus::Ongoing,
            wall: None,
        }
    );
    assert_eq!(reports[1].pursuer, Position::new(1, 1));
    assert_eq!(reports[1].evader, Position::new(1, 2));

    // The capturing ply does not complete its turn.
    let last = reports[2];
    assert_eq!(last.status, TurnStatus::Captured);
    assert_eq!(last.turn, 2);
    assert_eq!(last.pursuer, Position::new(1, 2));
    assert_eq!(game.state().outcome(), Outcome::Captured);
}

#[test]
fn idle_pursuer_lets_evader_walk_around_the_pillar() {
    let config = MatchConfig {
        size: 5,
        walls: vec![Position::new(2, 2)],
        pursuer: Position::new(0, 4),
        evader: Position::new(4, 4),
        goal: Position::new(0, 0),
        search_depth: 0,
        ..MatchConfig::default()
    };

    for first_mover in AgentKind::ALL {
        let (game, reports) = play(&MatchConfig {
            first_mover,
            ..config.clone()
        });

        let path: Vec<_> = reports.iter().map(|r| r.evader).collect();
        assert_eq!(
            path,
            [(3, 4), (2, 4), (2, 3), (1, 3), (1, 2), (0, 2), (0, 1), (0, 0)]
                .map(Position::from)
                .to_vec()
        );
        assert!(reports.iter().all(|r| r.pursuer == Position::new(0, 4)));
        assert_eq!(game.state().outcome(), Outcome::Escaped);
        assert_eq!(game.state().turn(), 7);
    }
}

#[test]
fn stalemate_walls_come_from_the_block_provider() {
    init_tracing();
    let config = MatchConfig {
        size: 5,
        pursuer: Position::new(0, 0),
        evader: Position::new(2, 2),
        goal: Position::new(4, 4),
        search_depth: 0,
        stalemate_threshold: 1,
        ..MatchConfig::default()
    };
    let mut game = MatchLoop::new(&config).unwrap();
    let mut blocks = ScriptedBlocks::new([
        Position::new(4, 4),
        Position::new(0, 4),
        Position::new(4, 0),
        Position::new(1, 4),
    ]);

    let first = game.step(&mut NoHuman, &mut blocks).unwrap();
    assert_eq!(first.evader, Position::new(3, 2));
    assert_eq!(first.wall, Some(Position::new(0, 4)));
    assert_eq!(game.state().turns_since_progress(), 0);
    assert_eq!(blocks.rejections(), &[BlockError::Forbidden(Position::new(4, 4))]);

    let last = game.run(&mut NoHuman, &mut blocks, |_, _| {}).unwrap();
    assert_eq!(last.status, TurnStatus::Escaped);
    assert_eq!(last.turn, 3);
    assert_eq!(game.state().grid().wall_count(), 3);
}

#[test]
fn quitting_block_provider_aborts() {
    let config = MatchConfig {
        size: 5,
        pursuer: Position::new(0, 0),
        evader: Position::new(2, 2),
        goal: Position::new(4, 4),
        search_depth: 0,
        stalemate_threshold: 1,
        ..MatchConfig::default()
    };
    let mut game = MatchLoop::new(&config).unwrap();

    let report = game.step(&mut NoHuman, &mut ScriptedBlocks::default()).unwrap();
    assert_eq!(report.status, TurnStatus::Aborted);
    assert_eq!(game.state().outcome(), Outcome::Aborted);
    assert_eq!(game.state().grid().wall_count(), 0);
}

#[test]
fn bound_is_distinct_from_an_outcome() {
    let config = MatchConfig {
        size: 5,
        walls: vec![Position::new(2, 2)],
        pursuer: Position::new(0, 4),
        evader: Position::new(4, 4),
        goal: Position::new(0, 0),
        search_depth: 0,
        max_turns: 1,
        ..MatchConfig::default()
    };
    let mut game = MatchLoop::new(&config).unwrap();

    let report = game.step(&mut NoHuman, &mut ScanBlockProvider).unwrap();
    assert_eq!(report.status, TurnStatus::BoundReached);
    assert_eq!(game.state().outcome(), Outcome::InProgress);
    assert!(game.is_over());

    assert_eq!(
        game.step(&mut NoHuman, &mut ScanBlockProvider),
        Err(MatchError::MatchOver)
    );
}

#[test]
fn finished_match_refuses_more_turns_and_blocks() {
    let config = MatchConfig {
        size: 3,
        pursuer: Position::new(0, 0),
        evader: Position::new(0, 2),
        goal: Position::new(2, 1),
        ..MatchConfig::default()
    };
    let (mut game, _) = play(&config);

    assert_eq!(
        game.step(&mut NoHuman, &mut ScanBlockProvider),
        Err(MatchError::MatchOver)
    );
    assert_eq!(game.place_block(Position::new(0, 0)), Err(MatchError::MatchOver));
}

#[test]
fn place_block_validates_the_cell() {
    let mut game = MatchLoop::new(&MatchConfig::default()).unwrap();
    let goal = game.state().goal();

    assert_eq!(
        game.place_block(goal),
        Err(MatchError::InvalidBlock(BlockError::Forbidden(goal)))
    );
    assert_eq!(
        game.place_block(Position::new(-1, 0)),
        Err(MatchError::InvalidBlock(BlockError::OutOfBounds(Position::new(-1, 0))))
    );

    game.place_block(Position::new(1, 1)).unwrap();
    assert_eq!(
        game.place_block(Position::new(1, 1)),
        Err(MatchError::InvalidBlock(BlockError::NotOpen(Position::new(1, 1))))
    );
}

#[test]
fn preset_matches_are_deterministic() {
    let cases = [
        (Level::Easy, AgentKind::Pursuer, TurnStatus::Escaped, 5),
        (Level::Easy, AgentKind::Evader, TurnStatus::Captured, 6),
        (Level::Medium, AgentKind::Pursuer, TurnStatus::Escaped, 17),
        (Level::Medium, AgentKind::Evader, TurnStatus::Escaped, 17),
    ];

    for (level, first_mover, status, turn) in cases {
        let config = MatchConfig {
            first_mover,
            ..level.config()
        };
        let (_, first) = play(&config);
        let (_, second) = play(&config);

        let last = *first.last().unwrap();
        assert_eq!((last.status, last.turn), (status, turn), "{level:?} {first_mover}");
        assert_eq!(first, second);
    }
}

#[test]
fn hard_preset_finishes_within_its_bound() {
    let (game, reports) = play(&Level::Hard.config());
    let last = reports.last().unwrap();

    assert!(last.status.is_final());
    assert!(game.state().turn() <= 60);
    // Every placed wall still leaves the agents and the goal on open cells.
    for cell in game.state().forbidden() {
        assert!(game.state().grid().is_open(cell));
    }
}

#[test]
fn match_decided_at_setup_takes_no_turns() {
    let config = MatchConfig {
        size: 1,
        pursuer: Position::new(0, 0),
        evader: Position::new(0, 0),
        goal: Position::new(0, 0),
        ..MatchConfig::default()
    };
    let mut game = MatchLoop::new(&config).unwrap();

    assert_eq!(game.status(), TurnStatus::Captured);
    assert_eq!(
        game.step(&mut NoHuman, &mut ScanBlockProvider),
        Err(MatchError::MatchOver)
    );
}
