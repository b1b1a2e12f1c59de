use time::OffsetDateTime;

/// Time-decayed score for a round.
///
/// `base_score` already reflects the per-miss penalties applied during
/// guessing. Decay is one point per whole elapsed second between the round
/// start and either `ended_at` (once the round is over) or `now`. Setting
/// `ended_at` freezes the value: further wall-clock time has no effect.
/// Never negative.
pub fn decayed_score(
    base_score: i64,
    started_at: OffsetDateTime,
    ended_at: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> i64 {
    let end = ended_at.unwrap_or(now);
    let elapsed = (end - started_at).whole_seconds().max(0);
    (base_score - elapsed).max(0)
}
