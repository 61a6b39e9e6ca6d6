//! Smart rule evaluator edge cases.

use crate::common::{make_episode, utc, utc_at};
use chrono::{DateTime, Duration, Utc};
use epiq::{
    evaluate_rule_at, rule_set_matches_at, FilterLogic, PlayStatus, RelativeDatePeriod,
    RuleComparison, RuleType, RuleValue, SmartListRule, SmartListRuleSet,
};

fn now() -> DateTime<Utc> {
    utc_at(2024, 3, 13, 12, 0, 0)
}

fn rule(rule_type: RuleType, comparison: RuleComparison, value: RuleValue) -> SmartListRule {
    SmartListRule::new(rule_type, comparison, value)
}

#[test]
fn play_status_rule_uses_derived_status() {
    let mut episode = make_episode("e", "Ep");
    episode.playback_position = 300.0;

    let in_progress = rule(
        RuleType::PlayStatus,
        RuleComparison::Equals,
        RuleValue::PlayStatus(PlayStatus::InProgress),
    );
    assert!(evaluate_rule_at(&episode, &in_progress, now()));

    let unplayed = rule(
        RuleType::PlayStatus,
        RuleComparison::NotEquals,
        RuleValue::PlayStatus(PlayStatus::Unplayed),
    );
    assert!(evaluate_rule_at(&episode, &unplayed, now()));
}

#[test]
fn playback_position_is_numeric() {
    let mut episode = make_episode("e", "Ep");
    episode.playback_position = 125.0;
    let past_two_minutes = rule(
        RuleType::PlaybackPosition,
        RuleComparison::GreaterThan,
        RuleValue::Int(120),
    );
    assert!(evaluate_rule_at(&episode, &past_two_minutes, now()));
}

#[test]
fn date_added_rule_sees_the_snapshot_field() {
    let mut episode = make_episode("e", "Ep");
    episode.date_added = utc(2024, 3, 12);
    let within = rule(
        RuleType::DateAdded,
        RuleComparison::Within,
        RuleValue::RelativePeriod(RelativeDatePeriod::Last7Days),
    );
    assert!(evaluate_rule_at(&episode, &within, now()));
}

#[test]
fn relative_before_compares_window_end() {
    let mut episode = make_episode("e", "Ep");
    // Inside last week's window: before(end) is true even though the
    // date is inside the window, not before its start.
    episode.pub_date = Some(utc(2024, 3, 5));
    let before_last_week = rule(
        RuleType::PubDate,
        RuleComparison::Before,
        RuleValue::RelativePeriod(RelativeDatePeriod::LastWeek),
    );
    assert!(evaluate_rule_at(&episode, &before_last_week, now()));

    episode.pub_date = Some(now());
    assert!(!evaluate_rule_at(&episode, &before_last_week, now()));
}

#[test]
fn missing_pub_date_never_matches_any_comparison() {
    let mut episode = make_episode("e", "Ep");
    episode.pub_date = None;
    for comparison in [
        RuleComparison::Equals,
        RuleComparison::Before,
        RuleComparison::After,
        RuleComparison::Within,
    ] {
        let r = rule(
            RuleType::PubDate,
            comparison,
            RuleValue::RelativePeriod(RelativeDatePeriod::ThisYear),
        );
        assert!(!evaluate_rule_at(&episode, &r, now()));
    }
}

#[test]
fn string_not_contains_excludes() {
    let mut episode = make_episode("e", "Spoiler Heavy Episode");
    episode.description = None;
    let clean = rule(
        RuleType::Title,
        RuleComparison::NotContains,
        RuleValue::Text("spoiler".to_string()),
    );
    assert!(!evaluate_rule_at(&episode, &clean, now()));

    episode.title = "Family Friendly Recap".to_string();
    assert!(evaluate_rule_at(&episode, &clean, now()));
}

#[test]
fn ruleset_or_logic_short_circuits_sensibly() {
    let mut episode = make_episode("e", "Ep");
    episode.rating = Some(5);
    episode.pub_date = Some(now() - Duration::days(400));

    let recent = rule(
        RuleType::PubDate,
        RuleComparison::Within,
        RuleValue::RelativePeriod(RelativeDatePeriod::Last30Days),
    );
    let loved = rule(
        RuleType::Rating,
        RuleComparison::GreaterThan,
        RuleValue::Int(4),
    );
    let set = SmartListRuleSet::new(vec![recent, loved], FilterLogic::Or);
    assert!(rule_set_matches_at(&episode, &set, now()));
}

#[test]
fn boolean_types_reject_non_equality_comparisons() {
    let mut episode = make_episode("e", "Ep");
    episode.is_archived = true;
    for comparison in [
        RuleComparison::Contains,
        RuleComparison::LessThan,
        RuleComparison::Between,
        RuleComparison::Within,
        RuleComparison::StartsWith,
    ] {
        let r = rule(RuleType::IsArchived, comparison, RuleValue::Bool(true));
        assert!(!evaluate_rule_at(&episode, &r, now()), "{:?}", comparison);
    }
}
