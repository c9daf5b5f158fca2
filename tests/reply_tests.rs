use levo::kernel::intent::{ClassificationResult, Emotion, Intent};
use levo::kernel::reply::pools;
use levo::kernel::reply::ResponseSelector;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn classified(intent: Intent, emotion: Emotion) -> ClassificationResult {
    ClassificationResult { intent, emotion }
}

#[test]
fn test_every_intent_has_a_pool() {
    for intent in Intent::ALL {
        assert!(!pools::pool(intent).is_empty(), "{} pool is empty", intent);
    }
}

#[test]
fn test_reply_drawn_from_intent_pool_with_fixed_emotion() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(3);

    for intent in Intent::ALL {
        for _ in 0..20 {
            let reply = selector.select(&classified(intent, Emotion::Neutral), &mut rng);
            assert!(pools::pool(intent).contains(&reply.text), "{} reply not from its pool", intent);
            assert_eq!(reply.emotion, pools::reply_emotion(intent));
        }
    }
}

#[test]
fn test_intent_emotion_mapping() {
    assert_eq!(pools::reply_emotion(Intent::Greeting), Emotion::Happy);
    assert_eq!(pools::reply_emotion(Intent::Motivation), Emotion::Happy);
    assert_eq!(pools::reply_emotion(Intent::Stress), Emotion::Concerned);
    assert_eq!(pools::reply_emotion(Intent::Work), Emotion::Neutral);
    assert_eq!(pools::reply_emotion(Intent::Break), Emotion::Neutral);
}

#[test]
fn test_emotion_only_matters_for_general() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(9);

    let reply = selector.select(&classified(Intent::Work, Emotion::Sad), &mut rng);
    assert!(pools::WORK_ADVICE.contains(&reply.text));
    assert_eq!(reply.emotion, Emotion::Neutral);
}

#[test]
fn test_general_fallback_tone() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(11);

    let sad = selector.select(&classified(Intent::General, Emotion::Sad), &mut rng);
    assert_eq!(sad.text, pools::SUPPORTIVE);
    assert_eq!(sad.emotion, Emotion::Concerned);

    let happy = selector.select(&classified(Intent::General, Emotion::Happy), &mut rng);
    assert_eq!(happy.text, pools::ENTHUSIASTIC);
    assert_eq!(happy.emotion, Emotion::Excited);

    for emotion in [Emotion::Neutral, Emotion::Concerned] {
        let reply = selector.select(&classified(Intent::General, emotion), &mut rng);
        assert!(pools::GENERAL.contains(&reply.text));
        assert_eq!(reply.emotion, Emotion::Neutral);
    }
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let selector = ResponseSelector::new();
    let mut a = StdRng::seed_from_u64(2024);
    let mut b = StdRng::seed_from_u64(2024);

    let first: Vec<_> = (0..10)
        .map(|_| selector.select(&classified(Intent::Stress, Emotion::Neutral), &mut a).text)
        .collect();
    let second: Vec<_> = (0..10)
        .map(|_| selector.select(&classified(Intent::Stress, Emotion::Neutral), &mut b).text)
        .collect();
    assert_eq!(first, second);
}
