//! Demo runs on a paused tokio runtime
//!
//! Feeds sleep between readings and the pager's unlock timer sleeps until
//! the cooldown ends; with paused time both advance instantly and in order.

use tilt_clock::RuntimeClock;
use tilt_core::NavigationIntent;
use tilt_gesture::PagerMode;
use tilt_runner::{DemoConfig, FeedConfig, RunnerError, TiltDemo, TiltFeedConfig};

fn scripted(mode: PagerMode, start_page: usize, samples: Vec<f64>) -> DemoConfig {
    DemoConfig {
        mode,
        start_page,
        feed: FeedConfig::Scripted {
            interval_ms: 100,
            samples,
        },
        ..Default::default()
    }
}

fn simulated(seed: u64, feed: TiltFeedConfig) -> DemoConfig {
    DemoConfig {
        seed: Some(seed),
        duration_ms: 10_000,
        feed: FeedConfig::Simulated(feed),
        ..Default::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_scripted_carousel_swing() {
    let _ = env_logger::try_init();

    let config = scripted(
        PagerMode::HorizontalCarousel,
        5,
        vec![-0.1, -0.25, -0.05, -0.2, -0.35],
    );
    let summary = TiltDemo::new(config)
        .unwrap()
        .run(RuntimeClock::new())
        .await
        .unwrap();

    assert_eq!(summary.feed, "scripted");
    assert_eq!(summary.readings, 5);
    assert_eq!(summary.cooling, 3);
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.final_page, 4);
    assert_eq!(summary.visited, vec![(NavigationIntent::Retreat, 4)]);
}

#[tokio::test(start_paused = true)]
async fn test_scripted_vertical_pager() {
    let config = scripted(PagerMode::VerticalPager, 3, vec![0.6, 0.8]);
    let summary = TiltDemo::new(config)
        .unwrap()
        .run(RuntimeClock::new())
        .await
        .unwrap();

    assert_eq!(summary.moves, 1);
    assert_eq!(summary.cooling, 1);
    assert_eq!(summary.final_page, 2);
}

#[tokio::test(start_paused = true)]
async fn test_retreat_on_first_page_is_ignored() {
    let config = scripted(PagerMode::HorizontalCarousel, 0, vec![-0.1, -0.25]);
    let summary = TiltDemo::new(config)
        .unwrap()
        .run(RuntimeClock::new())
        .await
        .unwrap();

    // The pager sent the move; the view refused it
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.final_page, 0);
    assert!(summary.visited.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_simulated_feed_respects_cooldown() {
    let config = simulated(11, TiltFeedConfig::default());
    let summary = TiltDemo::new(config)
        .unwrap()
        .run(RuntimeClock::new())
        .await
        .unwrap();

    assert_eq!(summary.feed, "simulated");
    assert_eq!(summary.readings, 100);
    assert_eq!(summary.skipped, 0);
    assert!(summary.moves >= 1);
    // 10s of readings with a 1s cooldown
    assert!(summary.moves <= 10, "moves = {}", summary.moves);
    assert!(summary.intents >= summary.moves);
    assert!(summary.final_page < summary.page_count);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_run_is_reproducible() {
    let first = TiltDemo::new(simulated(5, TiltFeedConfig::default()))
        .unwrap()
        .run(RuntimeClock::new())
        .await
        .unwrap();
    let second = TiltDemo::new(simulated(5, TiltFeedConfig::default()))
        .unwrap()
        .run(RuntimeClock::new())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_simulated_dropouts_are_skipped() {
    let feed = TiltFeedConfig {
        dropout_probability: 0.2,
        ..Default::default()
    };
    let summary = TiltDemo::new(simulated(21, feed))
        .unwrap()
        .run(RuntimeClock::new())
        .await
        .unwrap();

    assert_eq!(summary.readings, 100);
    assert!(summary.skipped > 0);
    assert!(summary.skipped < summary.readings);
}

#[test]
fn test_invalid_demo_rejected() {
    let config = DemoConfig {
        page_count: 4,
        start_page: 9,
        ..Default::default()
    };
    assert!(matches!(
        TiltDemo::new(config),
        Err(RunnerError::InvalidDemo(_))
    ));
}
