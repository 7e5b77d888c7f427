//! End-to-end games with known outcomes.
//!
//! The marketing game below is small enough to work out by hand: every
//! worker goes to marketing while the player can pay for it, and to the
//! investment fallback otherwise. Its budgets do not depend on the seed.

use rust_wpg::cards::{CardId, Deck, Decks, Talent, Venue};
use rust_wpg::core::{GameConfig, PlayerId, Season};
use rust_wpg::jobs::{JobBoard, JobKind, Quotas};
use rust_wpg::sim::{NullObserver, RecordingObserver, SimEvent, Simulation};

fn venues(count: u32, price: i64) -> Deck<Venue> {
    let mut deck = Deck::sorted_by(Venue::by_level);
    deck.extend_from_factory(count, |i| Venue {
        id: CardId::new(i),
        name: format!("Venue {i}"),
        level: 1 + i % 4,
        price,
        capacity: 4,
    })
    .unwrap();
    deck
}

fn marketing_game(seed: u64) -> Simulation {
    let config = GameConfig {
        base_view_capacity: 1000,
        ..GameConfig::default()
    }
    .with_seed(seed)
    .with_players(2, 2)
    .with_workers(2)
    .with_starting_budget(10);

    let board = JobBoard::builder(2)
        .category(vec![(JobKind::Marketing { cost: 2, payback: 1 }, Quotas::new(2, 4, 2))])
        .build();

    Simulation::with_board(config, board, Decks::new(venues(1, 1000), Deck::<Talent>::new())).unwrap()
}

fn placements_in_round(events: &[SimEvent], round: u32) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            SimEvent::WorkerPlaced { round: r, job_name, .. } if *r == round => Some(job_name.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_empty_venue_deck_plays_no_rounds() {
    let _ = env_logger::try_init();

    let mut sim = Simulation::new(GameConfig::default(), venues(0, 5), Deck::new()).unwrap();
    let mut recorder = RecordingObserver::new();
    let report = sim.run(&mut recorder);

    assert_eq!(report.total_rounds, 0);
    assert_eq!(report.max_money, 0);
    assert_eq!(
        recorder.events(),
        &[SimEvent::GameEnded {
            total_rounds: 0,
            max_money: 0
        }]
    );
}

#[test]
fn test_marketing_game_budgets() {
    let _ = env_logger::try_init();

    let mut sim = marketing_game(17);
    let mut budgets = Vec::new();
    while let Some(summary) = sim.step(&mut NullObserver) {
        // Both players follow the same path
        assert_eq!(summary.budgets[PlayerId::new(0)], summary.budgets[PlayerId::new(1)]);
        budgets.push(summary.budgets[PlayerId::new(0)]);
    }

    let mut expected = vec![4, -2, 0, 2];
    for round in 4..17 {
        expected.push(if round % 2 == 0 { 0 } else { 2 });
    }
    assert_eq!(budgets, expected);

    let report = sim.report();
    assert_eq!(report.total_rounds, 17);
    assert_eq!(report.years, 5);
    assert_eq!(report.max_money, 8);
    assert_eq!(report.final_budgets, rust_wpg::PlayerMap::with_value(2, 0));
    for (_, player) in sim.players().iter() {
        assert_eq!(player.views(), 11);
        assert_eq!(player.available_workers(), 2);
    }
}

#[test]
fn test_marketing_game_placements() {
    let mut sim = marketing_game(17);
    let mut recorder = RecordingObserver::new();
    sim.run(&mut recorder);
    let events = recorder.events();

    assert_eq!(placements_in_round(events, 0), vec!["Marketing"; 4]);
    assert_eq!(placements_in_round(events, 1), vec!["Marketing"; 4]);
    assert_eq!(placements_in_round(events, 2), vec!["Investment Acquisition"; 4]);
    assert_eq!(placements_in_round(events, 3), vec!["Investment Acquisition"; 4]);
    assert_eq!(
        placements_in_round(events, 4),
        vec!["Marketing", "Investment Acquisition", "Marketing", "Investment Acquisition"]
    );
    assert_eq!(placements_in_round(events, 5), vec!["Investment Acquisition"; 4]);

    for player in [PlayerId::new(0), PlayerId::new(1)] {
        assert_eq!(recorder.placements_by(player), 17 * 2);
    }
}

#[test]
fn test_same_seed_same_log() {
    let mut a = RecordingObserver::new();
    let mut b = RecordingObserver::new();
    marketing_game(99).run(&mut a);
    marketing_game(99).run(&mut b);
    assert_eq!(a.events(), b.events());
}

#[test]
fn test_year_cap_stops_before_deck_runs_out() {
    let mut sim = Simulation::new(GameConfig::default().with_seed(5), venues(200, 1000), Deck::new()).unwrap();
    let report = sim.run(&mut NullObserver);

    // Four rounds per year, and year 5 stops the game after its first round
    assert_eq!(report.total_rounds, 17);
    assert_eq!(report.years, 5);
    assert!(sim.decks().venues.count() > 150);
}

#[test]
fn test_seasons_cycle_and_years_follow_first_season() {
    let mut sim = Simulation::new(GameConfig::default().with_seed(8), venues(200, 1000), Deck::new()).unwrap();
    let first = sim.calendar().first_season();
    let mut recorder = RecordingObserver::new();
    sim.run(&mut recorder);

    let starts: Vec<(Season, u32)> = recorder
        .events()
        .iter()
        .filter_map(|e| match e {
            SimEvent::RoundStarted { season, year, .. } => Some((*season, *year)),
            _ => None,
        })
        .collect();

    assert_eq!(starts.len(), 17);
    let mut season = first;
    let mut year = 0;
    for (observed_season, observed_year) in starts {
        if season == first {
            year += 1;
        }
        assert_eq!(observed_season, season);
        assert_eq!(observed_year, year);
        season = season.next();
    }
}

#[test]
fn test_bundled_decks_play_to_completion() {
    let mut venue_deck = Deck::sorted_by(Venue::by_level);
    venue_deck.load(include_str!("../data/venues.json")).unwrap();
    let mut talent_deck = Deck::new();
    talent_deck.load(include_str!("../data/talent.json")).unwrap();

    let mut sim = Simulation::new(GameConfig::default().with_seed(1), venue_deck, talent_deck).unwrap();
    let report = sim.run(&mut NullObserver);

    assert!(report.total_rounds >= 1 && report.total_rounds <= 17);
    assert!(sim.is_finished());
    let owned: usize = sim.players().iter().map(|(_, p)| p.venues().len()).sum();
    assert!(owned > 0);
}

#[test]
fn test_enormous_venue_capacity_does_not_overflow() {
    // Base capacity is below the marketing payback, so the cheap venue is the only real job at first
    let config = GameConfig {
        base_view_capacity: 1,
        ..GameConfig::default()
    }
    .with_seed(3)
    .with_players(2, 2)
    .with_workers(2)
    .with_starting_budget(10);
    let board = JobBoard::builder(2)
        .category(vec![(JobKind::venue_acquisition(1), Quotas::new(1, 1, 1))])
        .category(vec![(JobKind::Marketing { cost: 2, payback: 2 }, Quotas::new(2, 4, 2))])
        .build();

    let mut deck = Deck::sorted_by(Venue::by_level);
    deck.add_cards(vec![Venue {
        id: CardId::new(0),
        name: "Stadium".to_string(),
        level: 1,
        price: 1,
        capacity: u32::MAX,
    }])
    .unwrap();
    deck.extend_from_factory(40, |i| Venue {
        id: CardId::new(i + 1),
        name: format!("Filler {i}"),
        level: 2,
        price: 1000,
        capacity: 4,
    })
    .unwrap();

    let mut sim = Simulation::with_board(config, board, Decks::new(deck, Deck::new())).unwrap();
    let report = sim.run(&mut NullObserver);

    assert_eq!(report.total_rounds, 17);
    let owner = sim
        .players()
        .iter()
        .map(|(_, p)| p)
        .find(|p| !p.venues().is_empty())
        .unwrap();
    assert_eq!(owner.view_capacity(), u32::MAX);
    assert!(owner.views() > 0);
}
