use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::domain::round::Round;
use crate::domain::scoring::decayed_score;
use crate::domain::snapshot::RoundSnapshot;

fn t0() -> OffsetDateTime {
    datetime!(2026-08-07 10:00:00 UTC)
}

fn fresh_snapshot(word: &str) -> RoundSnapshot {
    Round::new(word, t0()).unwrap().snapshot()
}

#[test]
fn starting_score_is_1000() {
    let round = Round::new("carafe", t0()).unwrap();
    assert_eq!(round.score_at(t0()), 1000);
}

#[test]
fn score_decays_one_point_per_whole_second() {
    let round = Round::new("carafe", t0()).unwrap();
    assert_eq!(round.score_at(t0() + Duration::seconds(5)), 995);
    // Sub-second elapsed time does not count.
    assert_eq!(round.score_at(t0() + Duration::milliseconds(900)), 1000);
}

#[test]
fn one_miss_costs_fifty_points() {
    let mut round = Round::new("carafe", t0()).unwrap();
    round.guess("z", t0());
    assert_eq!(round.score_at(t0()), 950);
}

#[test]
fn score_never_goes_negative_on_a_miss() {
    let mut snapshot = fresh_snapshot("carafe");
    snapshot.base_score = 30;
    let mut round = Round::from_snapshot(&snapshot).unwrap();

    round.guess("z", t0());
    assert_eq!(round.score_at(t0()), 0);
}

#[test]
fn decay_floors_at_zero() {
    assert_eq!(decayed_score(10, t0(), None, t0() + Duration::seconds(100)), 0);
}

#[test]
fn score_is_non_increasing_while_in_progress() {
    let round = Round::new("carafe", t0()).unwrap();
    let mut previous = round.score_at(t0());
    for i in 1..10i64 {
        let current = round.score_at(t0() + Duration::seconds(i));
        assert!(current <= previous);
        previous = current;
    }
}

#[test]
fn score_freezes_at_game_over() {
    let mut round = Round::new("aa", t0()).unwrap();
    let end = t0() + Duration::seconds(10);
    round.guess("a", end);
    assert!(round.is_game_over());

    let frozen = round.score_at(end);
    assert_eq!(frozen, 990);
    // Further wall-clock time must not change the score.
    assert_eq!(round.score_at(end + Duration::hours(5)), frozen);
}

#[test]
fn clock_going_backwards_does_not_inflate_the_score() {
    assert_eq!(
        decayed_score(1000, t0(), None, t0() - Duration::seconds(30)),
        1000
    );
}
