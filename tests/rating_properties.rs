//! Algebraic properties of the Elo update and the season fold

mod fixtures;

use approx::assert_abs_diff_eq;
use hoops_elo::rating::{expected_score, EloCalculator, RatingEngine};
use hoops_elo::types::{Game, GameOutcome};
use proptest::prelude::*;
use skillratings::elo::{elo, EloConfig as ReferenceConfig, EloRating};
use skillratings::Outcomes;

use fixtures::flat_seed;

const TEAMS: [&str; 4] = ["Atlanta Hawks", "Chicago Bulls", "Miami Heat", "Utah Jazz"];

fn arb_game() -> impl Strategy<Value = Game> {
    (0..TEAMS.len(), 1..TEAMS.len(), 70u32..140, 70u32..140).prop_map(
        |(home, offset, home_score, away_score)| {
            let away = (home + offset) % TEAMS.len();
            Game::new(TEAMS[home], TEAMS[away], home_score, away_score)
        },
    )
}

proptest! {
    #[test]
    fn expected_scores_sum_to_one(a in -3000.0f64..5000.0, b in -3000.0f64..5000.0) {
        let total = expected_score(a, b) + expected_score(b, a);
        prop_assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn expected_score_is_a_probability(a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        let p = expected_score(a, b);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn home_gain_mirrors_away_loss(
        home in 800.0f64..2200.0,
        away in 800.0f64..2200.0,
        k in 1.0f64..64.0,
        home_won in any::<bool>(),
    ) {
        let outcome = if home_won { GameOutcome::HomeWin } else { GameOutcome::AwayWin };
        let update = EloCalculator::with_k(k).unwrap().rate_game(home, away, outcome);

        let home_delta = update.new_home - home;
        let away_delta = update.new_away - away;
        prop_assert!((home_delta + away_delta).abs() < 1e-9);
    }

    #[test]
    fn winner_gains_loser_drops(
        home in 800.0f64..2200.0,
        away in 800.0f64..2200.0,
        k in 1.0f64..64.0,
        home_won in any::<bool>(),
    ) {
        let outcome = if home_won { GameOutcome::HomeWin } else { GameOutcome::AwayWin };
        let update = EloCalculator::with_k(k).unwrap().rate_game(home, away, outcome);

        if home_won {
            prop_assert!(update.new_home > home);
            prop_assert!(update.new_away < away);
        } else {
            prop_assert!(update.new_home < home);
            prop_assert!(update.new_away > away);
        }
    }

    #[test]
    fn history_length_counts_games_played(games in prop::collection::vec(arb_game(), 0..60)) {
        let season = RatingEngine::default()
            .apply_season(&flat_seed(&TEAMS, 1500.0), &games)
            .unwrap();

        for team in TEAMS {
            let appearances = games
                .iter()
                .filter(|game| game.home == team || game.away == team)
                .count();
            prop_assert_eq!(season.histories[team].len(), appearances);
            if let Some(last) = season.histories[team].last() {
                prop_assert_eq!(*last, season.final_ratings[team]);
            }
        }
        prop_assert_eq!(season.games_processed, games.len());
    }

    #[test]
    fn season_fold_is_deterministic(games in prop::collection::vec(arb_game(), 0..60)) {
        let engine = RatingEngine::default();
        let seed = flat_seed(&TEAMS, 1500.0);

        let first = engine.apply_season(&seed, &games).unwrap();
        let second = engine.apply_season(&seed, &games).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn game_order_changes_the_result() {
    let engine = RatingEngine::default();
    let seed = flat_seed(&TEAMS, 1500.0);
    let games = vec![
        Game::new("Atlanta Hawks", "Chicago Bulls", 100, 90),
        Game::new("Chicago Bulls", "Miami Heat", 100, 90),
        Game::new("Miami Heat", "Atlanta Hawks", 100, 90),
    ];
    let mut reversed = games.clone();
    reversed.reverse();

    let forward = engine.apply_season(&seed, &games).unwrap();
    let backward = engine.apply_season(&seed, &reversed).unwrap();
    assert_ne!(forward.final_ratings, backward.final_ratings);
}

#[test]
fn matches_reference_elo_implementation() {
    let calculator = EloCalculator::with_k(20.0).unwrap();
    let config = ReferenceConfig { k: 20.0 };

    for (home, away) in [(1500.0, 1500.0), (1650.0, 1420.0), (1310.0, 1875.5)] {
        for (outcome, reference_outcome) in [
            (GameOutcome::HomeWin, Outcomes::WIN),
            (GameOutcome::AwayWin, Outcomes::LOSS),
        ] {
            let update = calculator.rate_game(home, away, outcome);
            let (reference_home, reference_away) = elo(
                &EloRating { rating: home },
                &EloRating { rating: away },
                &reference_outcome,
                &config,
            );

            assert_abs_diff_eq!(update.new_home, reference_home.rating, epsilon = 1e-9);
            assert_abs_diff_eq!(update.new_away, reference_away.rating, epsilon = 1e-9);
        }
    }
}
