//! Keeps the screen current.
//!
//! - a loader task refreshes the sheet on a fixed cadence and publishes new
//!   snapshots on a watch channel
//! - the render loop ticks the clock every second, applies new snapshots, and
//!   recomputes counters and the calendar once a day just after midnight

use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use dayboard_core::board::{Board, Refresh};
use dayboard_core::date::{now_local, until_rollover};
use dayboard_core::sheet::RowSource;
use dayboard_core::snapshot::Snapshot;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};
use tracing::{debug, info};

use crate::screen::Screen;

const CLOCK_TICK: Duration = Duration::from_secs(1);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Periods driving the render loop.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub refresh_every: Duration,
    pub clock_tick: Duration,
    /// Delay until the first daily rollover. Later ones follow every 24h.
    pub first_rollover: Duration,
}

impl Timing {
    pub fn new(refresh_every: Duration) -> Self {
        Timing {
            refresh_every,
            clock_tick: CLOCK_TICK,
            first_rollover: until_rollover(now_local()),
        }
    }
}

/// What woke the render loop.
enum Wake {
    Clock,
    Update(Arc<Snapshot>),
    Rollover,
}

/// The screen plus the snapshot it was built from.
struct Dashboard {
    screen: Screen,
    snapshot: Arc<Snapshot>,
}

impl Dashboard {
    fn new(snapshot: Arc<Snapshot>, now: &DateTime<Local>) -> Self {
        let mut screen = Screen::default();
        screen.refresh_all(now, &snapshot);
        Dashboard { screen, snapshot }
    }

    fn apply(&mut self, wake: Wake, now: &DateTime<Local>) {
        let naive = now.naive_local();
        match wake {
            Wake::Clock => self.screen.refresh_clock(now, &self.snapshot),
            Wake::Update(snapshot) => {
                self.snapshot = snapshot;
                self.screen.refresh_events(&self.snapshot);
                self.screen.refresh_counters(naive, &self.snapshot);
                self.screen.refresh_calendar(naive, &self.snapshot);
            }
            Wake::Rollover => {
                self.screen.refresh_counters(naive, &self.snapshot);
                self.screen.refresh_calendar(naive, &self.snapshot);
            }
        }
    }
}

/// Re-run `board.refresh()` every `every`, starting one period from now.
///
/// Only successful refreshes are published. The task ends when every
/// receiver is gone.
pub fn spawn_loader<S>(
    mut board: Board<S>,
    every: Duration,
) -> (watch::Receiver<Arc<Snapshot>>, JoinHandle<()>)
where
    S: RowSource + Send + Sync + 'static,
{
    let (tx, rx) = watch::channel(board.snapshot());

    let handle = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            debug!("Scheduled sheet refresh");

            if let Refresh::Updated(snapshot) = board.refresh().await {
                if tx.send(snapshot).is_err() {
                    break;
                }
            }
        }
    });

    (rx, handle)
}

/// Run the live dashboard until `shutdown` resolves.
///
/// `shutdown` is polled from the start, so it also cuts short a slow first
/// load. Nothing is drawn in that case.
pub async fn run<S, W, F>(
    mut board: Board<S>,
    timing: Timing,
    out: &mut W,
    shutdown: F,
) -> Result<()>
where
    S: RowSource + Send + Sync + 'static,
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    // The first draw happens whatever the first refresh did, so a sheet that
    // is down still leaves a usable screen with default data.
    tokio::select! {
        _ = board.refresh() => {}
        _ = &mut shutdown => {
            info!("Interrupted during the first load");
            return Ok(());
        }
    }

    let mut dashboard = Dashboard::new(board.snapshot(), &Local::now());
    dashboard.screen.redraw(out)?;

    let (mut updates, loader) = spawn_loader(board, timing.refresh_every);

    let mut clock = interval_at(Instant::now() + timing.clock_tick, timing.clock_tick);
    clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let rollover = sleep(timing.first_rollover);
    tokio::pin!(rollover);

    info!(
        refresh_secs = timing.refresh_every.as_secs(),
        rollover_secs = timing.first_rollover.as_secs(),
        "Dashboard running"
    );

    loop {
        let wake = tokio::select! {
            _ = clock.tick() => Wake::Clock,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                Wake::Update(updates.borrow_and_update().clone())
            }
            _ = &mut rollover => {
                info!("Daily rollover");
                // Fixed 24h period from here on; no realignment to midnight.
                let next = rollover.deadline() + DAY;
                rollover.as_mut().reset(next);
                Wake::Rollover
            }
            _ = &mut shutdown => {
                info!("Interrupted");
                break;
            }
        };

        dashboard.apply(wake, &Local::now());
        dashboard.screen.redraw(out)?;
    }

    loader.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use dayboard_core::entry::SheetRow;
    use dayboard_core::error::{DayboardError, DayboardResult};
    use dayboard_core::sheet::SheetSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Redraws start with a full clear.
    const CLEAR: &str = "\x1b[2J";

    fn test_source() -> SheetSource {
        SheetSource {
            base_url: "http://unused.invalid".into(),
            sheet_id: "sheet".into(),
            tab: "mensajes".into(),
        }
    }

    struct Counting {
        source: SheetSource,
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl RowSource for Counting {
        fn source(&self) -> &SheetSource {
            &self.source
        }

        async fn fetch_rows(&self) -> DayboardResult<Vec<SheetRow>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                return Err(DayboardError::Config("down".into()));
            }
            Ok(vec![SheetRow::new("message", format!("refresh {n}"))])
        }
    }

    fn counting(fail: bool) -> (Counting, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Counting {
            source: test_source(),
            calls: Arc::clone(&calls),
            fail,
        };
        (source, calls)
    }

    /// A sheet that never answers.
    struct Stalled {
        source: SheetSource,
    }

    impl RowSource for Stalled {
        fn source(&self) -> &SheetSource {
            &self.source
        }

        async fn fetch_rows(&self) -> DayboardResult<Vec<SheetRow>> {
            std::future::pending().await
        }
    }

    /// Only the rollover timer fires within any test's horizon.
    fn rollover_only(first_rollover: Duration) -> Timing {
        Timing {
            refresh_every: DAY * 100,
            clock_tick: DAY * 100,
            first_rollover,
        }
    }

    async fn run_for<S>(board: Board<S>, timing: Timing, until: Duration) -> String
    where
        S: RowSource + Send + Sync + 'static,
    {
        let mut buf = Vec::new();
        run(board, timing, &mut buf, sleep(until)).await.unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_loader_waits_one_period_then_publishes() {
        let (source, calls) = counting(false);
        let every = Duration::from_secs(15 * 60);
        let (mut rx, handle) = spawn_loader(Board::new(source), every);

        sleep(every - Duration::from_secs(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tokio::time::timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("no refresh after one period")
            .unwrap();
        assert_eq!(rx.borrow_and_update().message(), "refresh 1");

        tokio::time::timeout(every + Duration::from_secs(1), rx.changed())
            .await
            .expect("no second refresh")
            .unwrap();
        assert_eq!(rx.borrow().message(), "refresh 2");

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_loader_does_not_publish_failures() {
        let (source, calls) = counting(true);
        let every = Duration::from_secs(60);
        let (mut rx, handle) = spawn_loader(Board::new(source), every);

        let waited = tokio::time::timeout(every * 3 + Duration::from_secs(1), rx.changed()).await;

        assert!(waited.is_err(), "a failed refresh was published");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(rx.borrow().message(), "¡Que tengas un gran día!");

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_startup_draws_defaults_after_failed_load() {
        let (source, calls) = counting(true);
        let timing = rollover_only(DAY * 100);

        let out = run_for(Board::new(source), timing, Duration::from_secs(1)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(out.matches(CLEAR).count(), 1);
        assert!(out.contains("¡Que tengas un gran día!"));
        assert!(out.contains("días lectivos"));
        assert!(out.contains("días laborables"));
        assert!(out.contains("Próximos eventos"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rollover_fires_at_deadline() {
        let first = Duration::from_secs(10);
        let (source, _) = counting(true);

        let before = run_for(
            Board::new(source),
            rollover_only(first),
            first - Duration::from_secs(1),
        )
        .await;
        assert_eq!(before.matches(CLEAR).count(), 1);

        let (source, _) = counting(true);
        let after = run_for(
            Board::new(source),
            rollover_only(first),
            first + Duration::from_secs(1),
        )
        .await;
        assert_eq!(after.matches(CLEAR).count(), 2);
        assert_eq!(after.matches("días lectivos").count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rollover_repeats_every_day_from_deadline() {
        let first = Duration::from_secs(10);

        let (source, _) = counting(true);
        let short = run_for(
            Board::new(source),
            rollover_only(first),
            first + DAY - Duration::from_secs(1),
        )
        .await;
        assert_eq!(short.matches(CLEAR).count(), 2);

        let (source, _) = counting(true);
        let long = run_for(
            Board::new(source),
            rollover_only(first),
            first + DAY + Duration::from_secs(1),
        )
        .await;
        assert_eq!(long.matches(CLEAR).count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_ticks_redraw_every_second() {
        let (source, calls) = counting(true);
        let timing = Timing {
            clock_tick: CLOCK_TICK,
            ..rollover_only(DAY * 100)
        };

        let out = run_for(Board::new(source), timing, Duration::from_millis(3500)).await;

        assert_eq!(out.matches(CLEAR).count(), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_during_first_load_draws_nothing() {
        let board = Board::new(Stalled {
            source: test_source(),
        });
        let timing = rollover_only(DAY * 100);

        let out = tokio::time::timeout(
            Duration::from_secs(60),
            run_for(board, timing, Duration::from_secs(5)),
        )
        .await
        .expect("shutdown did not interrupt the first load");

        assert!(out.is_empty());
    }

    fn marked_dashboard() -> Dashboard {
        let mut dashboard = Dashboard::new(Arc::new(Snapshot::default()), &Local::now());
        dashboard.screen = Screen {
            date: "DATE".into(),
            time: "TIME".into(),
            message: "MESSAGE".into(),
            school_days: "SCHOOL".into(),
            work_days: "WORK".into(),
            calendar: "CALENDAR".into(),
            event_list: "EVENTS".into(),
        };
        dashboard
    }

    #[test]
    fn test_clock_tick_touches_only_the_clock() {
        let now = Local.with_ymd_and_hms(2025, 6, 26, 10, 0, 0).unwrap();
        let mut dashboard = marked_dashboard();

        dashboard.apply(Wake::Clock, &now);

        let screen = &dashboard.screen;
        assert_eq!(screen.time, "10:00:00");
        assert_ne!(screen.date, "DATE");
        assert_eq!(screen.message, "¡Que tengas un gran día!");
        assert_eq!(screen.school_days, "SCHOOL");
        assert_eq!(screen.work_days, "WORK");
        assert_eq!(screen.calendar, "CALENDAR");
        assert_eq!(screen.event_list, "EVENTS");
    }

    #[test]
    fn test_rollover_leaves_clock_and_events() {
        let now = Local.with_ymd_and_hms(2025, 6, 26, 0, 1, 0).unwrap();
        let mut dashboard = marked_dashboard();

        dashboard.apply(Wake::Rollover, &now);

        let screen = &dashboard.screen;
        assert_eq!(screen.time, "TIME");
        assert_eq!(screen.event_list, "EVENTS");
        assert!(screen.school_days.contains("días lectivos"));
        assert!(screen.calendar.contains("junio 2025"));
    }

    #[test]
    fn test_update_replaces_snapshot_panels() {
        let now = Local.with_ymd_and_hms(2025, 6, 26, 10, 0, 0).unwrap();
        let mut dashboard = marked_dashboard();
        let rows = vec![
            SheetRow::new("message", "Nuevo"),
            SheetRow::new("eventoFiesta", "2025-06-27"),
        ];

        dashboard.apply(Wake::Update(Arc::new(Snapshot::from_rows(&rows))), &now);

        let screen = &dashboard.screen;
        assert_eq!(screen.message, "MESSAGE");
        assert!(screen.event_list.contains("Fiesta"));
        assert!(screen.school_days.contains("días lectivos"));
        assert_eq!(dashboard.snapshot.message(), "Nuevo");
    }
}
