//! Starter feed content.
//!
//! A fresh session ships with a few stories already on the board so the
//! feed is browsable before anyone posts. Seeded data lives only in memory
//! and is rebuilt on every bootstrap.

use atlas_core::analysis::{CopingStrategy, StoryAnalysis, StrategyKind};
use atlas_core::story::{Comment, Story};
use chrono::{Duration, Utc};

fn analysis(
    tones: &[&str],
    summary: &str,
    strategies: Vec<CopingStrategy>,
    cultural_nuance: Option<&str>,
) -> StoryAnalysis {
    StoryAnalysis {
        emotional_tone: tones.iter().map(|t| t.to_string()).collect(),
        summary: summary.to_string(),
        coping_strategies: strategies,
        cultural_nuance: cultural_nuance.map(|n| n.to_string()),
        is_crisis: false,
    }
}

fn strategy(title: &str, description: &str, kind: StrategyKind) -> CopingStrategy {
    CopingStrategy {
        title: title.to_string(),
        description: description.to_string(),
        kind,
    }
}

fn comment(author: &str, content: &str, helpful_count: u32, minutes_ago: i64) -> Comment {
    let mut comment = Comment::new(author, content);
    comment.timestamp = Utc::now() - Duration::minutes(minutes_ago);
    comment.helpful_count = helpful_count;
    comment
}

fn seed_story(
    content: &str,
    author: &str,
    hours_ago: i64,
    tags: &[&str],
    similar_feeling_count: u32,
    uplift_count: u32,
    analysis: StoryAnalysis,
    comments: Vec<Comment>,
) -> Story {
    let mut story = Story::new(content, author, analysis);
    story.timestamp = Utc::now() - Duration::hours(hours_ago);
    story.tags = tags.iter().map(|t| t.to_string()).collect();
    story.similar_feeling_count = similar_feeling_count;
    story.uplift_count = uplift_count;
    story.comments = comments;
    story
}

/// The starter stories, newest first.
pub fn starter_stories() -> Vec<Story> {
    vec![
        seed_story(
            "I moved three time zones away for a job I wanted for years, and \
             tonight the quiet in my new apartment felt louder than any city \
             street. I keep the radio on just to hear another voice.",
            "HarborLight",
            1,
            &["Loneliness"],
            12,
            38,
            analysis(
                &["Homesick", "Isolated"],
                "You're grieving the everyday noise of home while building a new one.",
                vec![strategy(
                    "Behavioral Activation",
                    "Pick one nearby place to visit this week.",
                    StrategyKind::Cbt,
                )],
                Some("Leaving a close-knit household can make independence feel like loss."),
            ),
            vec![
                comment(
                    "QuietLion",
                    "The first months after my move were exactly like this. A standing \
                     coffee order at the same cafe slowly turned strangers into faces I knew.",
                    5,
                    50,
                ),
                comment(
                    "Nora_K",
                    "The silence gets softer. Sending you some warmth tonight.",
                    3,
                    45,
                ),
            ],
        ),
        seed_story(
            "Everyone at work thinks I have it together. I smile in meetings and \
             answer every message, and then I sit in my car for twenty minutes \
             before I can drive home.",
            "Echo_Cloud",
            2,
            &["Work Stress"],
            45,
            22,
            analysis(
                &["Overwhelmed", "Anxious"],
                "Holding up a capable front is costing you more than anyone can see.",
                vec![strategy(
                    "Cognitive Reframing",
                    "Challenge the thought that your worth is tied to output.",
                    StrategyKind::Cbt,
                )],
                None,
            ),
            vec![comment(
                "Daily_Survivor",
                "The car moment is so real. A hard stop at five helped me more than \
                 any productivity trick.",
                11,
                100,
            )],
        ),
        seed_story(
            "Managed a short walk around the block today after three days of not \
             leaving my room. The cold air actually felt like something good.",
            "TinyVictory",
            24,
            &["Depression"],
            89,
            156,
            analysis(
                &["Hopeful", "Tired"],
                "You're marking a small but real moment of self-care.",
                vec![strategy(
                    "Savoring",
                    "Hold on to how the air felt; small moments build momentum.",
                    StrategyKind::Mindfulness,
                )],
                None,
            ),
            vec![comment(
                "Sunlight_Chaser",
                "One block after three days is a huge distance. Proud of you.",
                8,
                600,
            )],
        ),
    ]
}
