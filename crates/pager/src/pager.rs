//! Gesture Driven Pager - per-reading orchestration
//!
//! Owns all gesture state for one activation: the classifier's memory, the
//! cooldown lock, the view it drives, and the clock it reads. Each reading is
//! handled synchronously; there is nothing to lock.

use chrono::Duration;
use tilt_core::{NavigationIntent, OrientationSample, Timestamp};
use tilt_gesture::{GestureConfig, NavigationDebouncer, RotationIntentClassifier};
use tilt_ports::{Clock, PagedView, SensorReading};
use uuid::Uuid;

/// What happened to one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerOutcome {
    /// Sensor reported an error; state untouched
    Skipped,
    /// Cooldown active; reading remembered but not evaluated
    Cooling,
    /// Evaluated, no intent
    Idle,
    /// Intent accepted but the user is scrolling manually
    Suppressed(NavigationIntent),
    /// Intent accepted and sent to the view
    Moved(NavigationIntent),
}

/// Running counters for one activation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagerStats {
    /// Readings received, including errors
    pub readings: u64,
    /// Sensor errors skipped
    pub skipped: u64,
    /// Readings that arrived during cooldown
    pub cooling: u64,
    /// Intents produced by the classifier
    pub intents: u64,
    /// Accepted intents dropped because of manual scrolling
    pub suppressed: u64,
    /// Moves sent to the view
    pub moves: u64,
    /// Cooldowns cleared by the scheduled unlock
    pub unlocks: u64,
}

/// Classifier, debouncer and view wired together
pub struct GestureDrivenPager<V, C> {
    session_id: Uuid,
    config: GestureConfig,
    classifier: RotationIntentClassifier,
    debouncer: NavigationDebouncer,
    view: V,
    clock: C,
    stats: PagerStats,
}

impl<V: PagedView, C: Clock> GestureDrivenPager<V, C> {
    /// Activate a pager over a view
    pub fn new(config: GestureConfig, view: V, clock: C) -> Self {
        let classifier = RotationIntentClassifier::new(&config);
        let debouncer = NavigationDebouncer::new(config.cooldown());
        let session_id = Uuid::new_v4();

        log::debug!(
            "[{}] Pager activated: axis={:?} cooldown={}ms clock={}",
            session_id,
            config.axis,
            config.cooldown_ms,
            clock.name()
        );

        Self {
            session_id,
            config,
            classifier,
            debouncer,
            view,
            clock,
            stats: PagerStats::default(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn stats(&self) -> PagerStats {
        self.stats
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view (e.g. to simulate manual scrolling)
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn classifier(&self) -> &RotationIntentClassifier {
        &self.classifier
    }

    pub fn debouncer(&self) -> &NavigationDebouncer {
        &self.debouncer
    }

    /// Handle one item from the sensor stream
    pub fn handle_reading(&mut self, reading: SensorReading) -> PagerOutcome {
        self.stats.readings += 1;

        match reading {
            Ok(attitude) => self.process(attitude.signal(self.config.axis)),
            Err(e) => {
                self.stats.skipped += 1;
                log::debug!("[{}] Skipping reading: {}", self.session_id, e);
                PagerOutcome::Skipped
            }
        }
    }

    /// Handle one scalar rotation sample directly
    pub fn handle_sample(&mut self, sample: OrientationSample) -> PagerOutcome {
        self.stats.readings += 1;
        self.process(sample)
    }

    fn process(&mut self, sample: OrientationSample) -> PagerOutcome {
        let now = self.clock.now();

        if self.debouncer.is_locked(now) {
            self.classifier.observe(sample);
            self.stats.cooling += 1;
            return PagerOutcome::Cooling;
        }

        let Some(intent) = self.classifier.on_sample(sample) else {
            return PagerOutcome::Idle;
        };
        self.stats.intents += 1;

        // Unlocked at `now` (checked above), so this always starts a cooldown
        self.debouncer.try_fire(intent, now);

        // The cooldown is consumed even when the move is dropped below
        if self.config.suppress_while_interacting && self.view.is_interacting() {
            self.stats.suppressed += 1;
            log::debug!(
                "[{}] Suppressing {} during manual scroll",
                self.session_id,
                intent
            );
            return PagerOutcome::Suppressed(intent);
        }

        match intent {
            NavigationIntent::Advance => self.view.advance(),
            NavigationIntent::Retreat => self.view.retreat(),
        }
        self.stats.moves += 1;

        log::info!(
            "[{}] {} -> page {}/{}",
            self.session_id,
            intent,
            self.view.current_page() + 1,
            self.view.page_count()
        );

        PagerOutcome::Moved(intent)
    }

    /// When the current cooldown ends, if one is running
    pub fn unlock_at(&self) -> Option<Timestamp> {
        self.debouncer.unlock_at()
    }

    /// Time left until the cooldown ends, per this pager's clock
    pub fn unlock_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.debouncer
            .unlock_at()
            .map(|until| (until - now).max(Duration::zero()))
    }

    /// Scheduled unlock: clear the cooldown if it has run out
    pub fn release_expired(&mut self) -> bool {
        let released = self.debouncer.release_expired(self.clock.now());
        if released {
            self.stats.unlocks += 1;
            log::debug!("[{}] Navigation unlocked", self.session_id);
        }
        released
    }

    /// Tear down gesture state; counters and the view are kept
    pub fn deactivate(&mut self) {
        self.classifier.reset();
        self.debouncer.reset();
        log::debug!(
            "[{}] Pager deactivated after {} readings, {} moves",
            self.session_id,
            self.stats.readings,
            self.stats.moves
        );
    }
}
