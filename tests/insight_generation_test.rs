// ABOUTME: Integration tests for coaching insight generation
// ABOUTME: Covers ranking, capping, banding, and context-sensitive suggestions

use chrono::NaiveDate;
use nourish::intelligence::{
    CoachingContext, EatingPattern, EatingPatternType, InsightGenerator, InsightPriority,
    InsightType, PatternImpact, RemainingTargets, TimeOfDay,
};
use nourish::models::{
    CalorieProgress, DailyProgress, GoalStatus, MacroBreakdown, MacroProgress,
};

fn today(consumed: f64, protein: f64) -> DailyProgress {
    let status = if consumed > 2100.0 {
        GoalStatus::Over
    } else if consumed < 1900.0 {
        GoalStatus::Under
    } else {
        GoalStatus::Met
    };
    DailyProgress {
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        calories: CalorieProgress::new(consumed, 2000.0),
        macros: MacroBreakdown {
            protein: MacroProgress::new(protein, 150.0),
            carbs: MacroProgress::new(180.0, 200.0),
            fats: MacroProgress::new(60.0, 67.0),
        },
        status,
    }
}

fn context(consumed: f64, protein: f64, time_of_day: TimeOfDay) -> CoachingContext {
    CoachingContext {
        today: Some(today(consumed, protein)),
        remaining: RemainingTargets {
            calories: 2000.0 - consumed,
            protein_g: 150.0 - protein,
            carbs_g: 0.0,
            fat_g: 0.0,
        },
        time_of_day,
    }
}

fn concerning_pattern() -> EatingPattern {
    EatingPattern {
        pattern_type: EatingPatternType::WeekendVariance,
        description: "Weekend calories differ from weekdays by 45%".into(),
        frequency: 0.45,
        impact: PatternImpact::Concerning,
        suggestion: "Plan weekend meals ahead".into(),
        confidence: 0.65,
    }
}

#[test]
fn list_is_capped_at_eight_and_sorted() {
    let generator = InsightGenerator::new();
    let patterns = vec![concerning_pattern()];

    let insights = generator.generate(
        &context(1100.0, 50.0, TimeOfDay::Evening),
        &patterns,
        &[],
        0.5,
    );

    assert!(insights.len() <= 8);
    let ranks: Vec<u8> = insights.iter().map(|i| i.priority.as_rank()).collect();
    assert!(ranks.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn precision_tracking_is_celebrated() {
    let generator = InsightGenerator::new();
    let insights = generator.generate(&context(1960.0, 150.0, TimeOfDay::Night), &[], &[], 0.85);

    assert!(insights.iter().any(|i| {
        i.insight_type == InsightType::Celebration && i.message.contains("precision")
    }));
}

#[test]
fn late_day_protein_gap_gets_a_high_priority_nudge() {
    let generator = InsightGenerator::new();
    let insights = generator.generate(&context(1700.0, 100.0, TimeOfDay::Evening), &[], &[], 0.85);

    let nudge = insights
        .iter()
        .find(|i| i.message.contains("50g of protein"))
        .expect("protein timing suggestion");
    assert_eq!(nudge.priority, InsightPriority::High);
    assert!(nudge.actionable);
}

#[test]
fn adherence_bands_produce_the_right_tones() {
    let generator = InsightGenerator::new();
    let ctx = context(2000.0, 150.0, TimeOfDay::Night);

    let strong = generator.generate(&ctx, &[], &[], 0.92);
    assert!(strong
        .iter()
        .any(|i| i.insight_type == InsightType::Celebration && i.timeframe == "this week"));

    let slipping = generator.generate(&ctx, &[], &[], 0.5);
    assert!(slipping.iter().any(|i| {
        i.insight_type == InsightType::Encouragement && i.priority == InsightPriority::High
    }));
}

#[test]
fn concerning_pattern_is_surfaced_as_coaching() {
    let generator = InsightGenerator::new();
    let patterns = vec![concerning_pattern()];

    let insights = generator.generate(
        &context(2000.0, 150.0, TimeOfDay::Night),
        &patterns,
        &[],
        0.85,
    );

    assert!(insights
        .iter()
        .any(|i| i.message.contains("Weekend calories differ")));
}

#[test]
fn insight_enums_serialize_snake_case() {
    let json = serde_json::to_string(&InsightType::Celebration).unwrap();
    assert_eq!(json, "\"celebration\"");
    let json = serde_json::to_string(&InsightPriority::High).unwrap();
    assert_eq!(json, "\"high\"");
}

#[test]
fn confidence_is_always_explicit_and_bounded() {
    let generator = InsightGenerator::new();
    let insights = generator.generate(&context(900.0, 40.0, TimeOfDay::Afternoon), &[], &[], 0.3);

    assert!(!insights.is_empty());
    assert!(insights
        .iter()
        .all(|i| (0.0..=1.0).contains(&i.confidence)));
}
