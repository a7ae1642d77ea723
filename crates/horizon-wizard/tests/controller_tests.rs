//! Tests for screen transitions, caching and forced requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use horizon_wizard::prelude::*;
use horizon_wizard::{Langpack, NavigationRequest, ScreenBuildError};

type Log = Arc<Mutex<Vec<String>>>;

const NAME: DataKey<String> = DataKey::new("name");

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A screen that records its lifecycle calls.
struct Recorder {
    id: &'static str,
    log: Log,
}

impl Screen for Recorder {
    fn name(&self) -> &str {
        self.id
    }

    fn description(&self) -> Option<&str> {
        Some("recording screen")
    }

    fn init_ui(&mut self, _ctx: &ScreenContext) {
        self.log.lock().push(format!("init:{}", self.id));
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) {
        self.log.lock().push(format!("enter:{}", self.id));
    }

    fn on_leave(&mut self, _ctx: &ScreenContext) {
        self.log.lock().push(format!("leave:{}", self.id));
    }

    fn on_cancelled(&mut self, _ctx: &ScreenContext) {
        self.log.lock().push(format!("cancelled:{}", self.id));
    }

    fn on_finished(&mut self, _ctx: &ScreenContext) {
        self.log.lock().push(format!("finished:{}", self.id));
    }
}

fn recorder(id: &'static str, log: &Log) -> ScreenRegistration {
    let log = log.clone();
    ScreenRegistration::new(id, move || Recorder {
        id,
        log: log.clone(),
    })
}

struct Fixture {
    wizard: Wizard,
    shell: HeadlessShell,
    log: Log,
    finishes: Arc<AtomicUsize>,
}

fn fixture_with(flow: LinearFlow, catalog: impl FnOnce(&Log) -> ScreenCatalog) -> Fixture {
    init_tracing();
    let log = Log::default();
    let finishes = Arc::new(AtomicUsize::new(0));
    let counter = finishes.clone();
    let shell = HeadlessShell::new();

    let flow = flow.on_finish(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let wizard = Wizard::builder("a", flow, shell.clone())
        .name("Test wizard")
        .locale("en")
        .catalog(catalog(&log))
        .build()
        .unwrap();

    Fixture {
        wizard,
        shell,
        log,
        finishes,
    }
}

fn fixture() -> Fixture {
    fixture_with(LinearFlow::new(["a", "b", "c"]), |log| {
        ScreenCatalog::new()
            .with(recorder("a", log))
            .with(recorder("b", log))
            .with(recorder("c", log))
    })
}

#[derive(Debug)]
struct Offline;

impl std::fmt::Display for Offline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("license server offline")
    }
}

impl std::error::Error for Offline {}

/// "a" then "b", where "b" cannot be built.
fn offline_fixture() -> Fixture {
    fixture_with(LinearFlow::new(["a", "b"]), |log| {
        ScreenCatalog::new()
            .with(recorder("a", log))
            .with(ScreenRegistration::fallible("b", || {
                Err(Box::new(Offline) as ScreenBuildError)
            }))
    })
}

fn take(log: &Log) -> Vec<String> {
    std::mem::take(&mut *log.lock())
}

#[test]
fn test_show_runs_init_then_enter_before_first_frame() {
    let mut f = fixture();
    f.wizard.show().unwrap();

    assert_eq!(take(&f.log), ["init:a", "enter:a"]);
    assert_eq!(f.shell.open_count(), 1);

    let frame = f.shell.last_frame().unwrap();
    assert_eq!(frame.screen, "a");
    assert_eq!(frame.header.title, "a");
    assert_eq!(frame.header.subtitle.as_deref(), Some("recording screen"));
    assert_eq!(frame.labels.previous, "Previous");
    assert!(!frame.navigation.can_go_previous);
    assert!(frame.navigation.can_go_next);
    assert!(frame.navigation.can_cancel);
    assert!(!frame.navigation.can_finish);
}

#[test]
fn test_show_with_unregistered_initial_screen() {
    init_tracing();
    let shell = HeadlessShell::new();
    let mut wizard = Wizard::builder("missing", LinearFlow::new(["missing"]), shell.clone())
        .build()
        .unwrap();

    let err = wizard.show().unwrap_err();
    assert!(err.is_invalid_screen());
    assert_eq!(wizard.status(), &WizardStatus::Uninitialized);
    assert_eq!(shell.open_count(), 0);
}

#[test]
fn test_problem_blocks_next_and_finish() {
    let mut f = fixture();
    f.wizard.show().unwrap();

    let ctx = f.wizard.current_context().unwrap().clone();
    ctx.set_can_finish(true);
    ctx.set_can_go_next(true);
    ctx.set_problem(Some("Name is required".into()));
    f.wizard.refresh().unwrap();

    assert!(!ctx.can_go_next());
    assert!(!ctx.can_finish());
    assert!(!f.wizard.next().unwrap());
    assert!(!f.wizard.finish());
    assert_eq!(f.wizard.current_screen(), Some(&"a".into()));

    let frame = f.shell.last_frame().unwrap();
    assert_eq!(frame.navigation.problem.as_deref(), Some("Name is required"));
    assert!(!frame.navigation.can_finish);
}

#[test]
fn test_instances_are_reused_across_back_and_forth() {
    let mut f = fixture();
    f.wizard.show().unwrap();

    assert!(f.wizard.next().unwrap());
    let serial_b = f.wizard.current_instance_serial();
    assert!(f.wizard.next().unwrap());
    let serial_c = f.wizard.current_instance_serial();

    assert!(f.wizard.previous().unwrap());
    assert_eq!(f.wizard.current_instance_serial(), serial_b);
    assert!(f.wizard.previous().unwrap());
    assert!(f.wizard.next().unwrap());
    assert!(f.wizard.next().unwrap());
    assert_eq!(f.wizard.current_instance_serial(), serial_c);

    let inits = take(&f.log).into_iter().filter(|e| e.starts_with("init:")).count();
    assert_eq!(inits, 3);
    assert_eq!(f.wizard.registry().built(), 3);
}

#[test]
fn test_user_input_survives_navigation() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    f.wizard.next().unwrap();

    let ctx_b = f.wizard.current_context().unwrap().clone();
    ctx_b.set_problem(Some("pick an option".into()));
    f.wizard.previous().unwrap();
    f.wizard.next().unwrap();

    // The resolvers reset next/previous on entry, but the problem stays
    assert_eq!(
        f.wizard.current_context().unwrap().problem().as_deref(),
        Some("pick an option")
    );
}

#[test]
fn test_hooks_run_on_forward_navigation_only() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    take(&f.log);

    f.wizard.next().unwrap();
    f.wizard.next().unwrap();
    assert_eq!(take(&f.log), ["leave:a", "init:b", "enter:b", "leave:b", "init:c", "enter:c"]);

    f.wizard.previous().unwrap();
    f.wizard.previous().unwrap();
    assert!(take(&f.log).is_empty());

    f.wizard.next().unwrap();
    assert_eq!(take(&f.log), ["leave:a", "enter:b"]);
}

#[test]
fn test_clear_point_empties_cache() {
    let mut f = fixture_with(LinearFlow::new(["a", "b", "reset", "c"]), |log| {
        ScreenCatalog::new()
            .with(recorder("a", log))
            .with(recorder("b", log))
            .with(recorder("reset", log).as_clear_point())
            .with(recorder("c", log))
    });
    f.wizard.show().unwrap();
    f.wizard.next().unwrap();
    let serial_b = f.wizard.current_instance_serial();
    assert_eq!(f.wizard.registry().len(), 2);

    f.wizard.next().unwrap();
    assert_eq!(f.wizard.current_screen(), Some(&"reset".into()));
    assert_eq!(f.wizard.registry().len(), 1);
    take(&f.log);

    f.wizard.previous().unwrap();
    assert_ne!(f.wizard.current_instance_serial(), serial_b);
    assert_eq!(take(&f.log), ["init:b"]);
}

#[test]
fn test_reset_screens_rebuilds_displayed_screen_on_next_visit() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    f.wizard.next().unwrap();
    let serial_b = f.wizard.current_instance_serial();

    f.wizard.reset_screens();
    assert!(f.wizard.registry().is_empty());
    assert!(f.wizard.registry().is_retired(&"b".into()));
    // Still displayed and usable
    assert_eq!(f.wizard.current_instance_serial(), serial_b);
    assert!(f.wizard.current_context().unwrap().can_go_previous());
    take(&f.log);

    assert!(f.wizard.previous().unwrap());
    assert!(!f.wizard.registry().is_retired(&"b".into()));
    assert!(f.wizard.next().unwrap());

    assert_ne!(f.wizard.current_instance_serial(), serial_b);
    assert_eq!(take(&f.log), ["init:a", "leave:a", "init:b", "enter:b"]);
}

#[test]
fn test_forced_finish_honours_guard() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    let ctx = f.wizard.current_context().unwrap().clone();

    assert!(ctx.force_finish());
    f.wizard.refresh().unwrap();
    assert!(f.wizard.is_showing());
    assert_eq!(f.finishes.load(Ordering::SeqCst), 0);

    ctx.set_can_finish(true);
    ctx.force_finish();
    ctx.force_finish();
    f.wizard.refresh().unwrap();

    assert_eq!(f.wizard.status(), &WizardStatus::Finished);
    assert_eq!(f.finishes.load(Ordering::SeqCst), 1);
    assert!(take(&f.log).contains(&"finished:a".to_string()));
    assert!(!f.shell.is_open());

    // Late requests are dropped
    ctx.force_finish();
    f.wizard.refresh().unwrap();
    assert_eq!(f.finishes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_forced_next_from_worker_thread() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    let navigator = f.wizard.navigator();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let navigator = navigator.clone();
            std::thread::spawn(move || navigator.request(NavigationRequest::Next))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }

    // Duplicate requests collapse into one advance
    f.wizard.refresh().unwrap();
    assert_eq!(f.wizard.current_screen(), Some(&"b".into()));
}

#[test]
fn test_forced_previous_and_cancel() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    f.wizard.next().unwrap();

    let ctx = f.wizard.current_context().unwrap().clone();
    ctx.force_previous();
    f.wizard.refresh().unwrap();
    assert_eq!(f.wizard.current_screen(), Some(&"a".into()));

    f.wizard.current_context().unwrap().force_cancel();
    f.wizard.refresh().unwrap();
    assert!(f.wizard.was_cancelled());
}

#[test]
fn test_cancel_guard_and_confirmation() {
    let confirmations = Arc::new(AtomicUsize::new(0));
    let counter = confirmations.clone();
    let flow = LinearFlow::new(["a", "b"]).confirm_cancel(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        false
    });
    let mut f = fixture_with(flow, |log| {
        ScreenCatalog::new()
            .with(recorder("a", log))
            .with(recorder("b", log))
    });
    f.wizard.show().unwrap();
    f.wizard.data().insert(&NAME, "Ada".to_string());

    let ctx = f.wizard.current_context().unwrap().clone();
    ctx.set_can_cancel(false);
    assert!(!f.wizard.cancel());
    assert_eq!(confirmations.load(Ordering::SeqCst), 0);

    ctx.set_can_cancel(true);
    assert!(!f.wizard.cancel());
    assert!(!f.wizard.close_requested());
    assert_eq!(confirmations.load(Ordering::SeqCst), 2);

    assert!(f.wizard.is_showing());
    assert_eq!(f.wizard.current_screen(), Some(&"a".into()));
    assert_eq!(f.wizard.data().get(&NAME).as_deref(), Some("Ada"));
    assert!(f.shell.is_open());
}

#[test]
fn test_cancel_clears_data_and_notifies() {
    let mut f = fixture();
    let cancelled = Arc::new(AtomicUsize::new(0));
    let counter = cancelled.clone();
    f.wizard.cancelled.connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    f.wizard.show().unwrap();
    f.wizard.data().insert(&NAME, "Ada".to_string());
    take(&f.log);

    assert!(f.wizard.cancel());
    assert!(f.wizard.was_cancelled());
    assert!(f.wizard.data().is_empty());
    assert_eq!(take(&f.log), ["cancelled:a"]);
    assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    assert_eq!(f.shell.close_count(), 1);
}

#[test]
fn test_window_close_keeps_data_and_skips_cancel_hook() {
    let mut f = fixture();
    let cancelled = Arc::new(AtomicUsize::new(0));
    let counter = cancelled.clone();
    f.wizard.cancelled.connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    f.wizard.show().unwrap();
    f.wizard.data().insert(&NAME, "Ada".to_string());
    take(&f.log);

    assert!(f.wizard.close_requested());
    assert!(f.wizard.was_cancelled());
    assert_eq!(f.wizard.data().get(&NAME).as_deref(), Some("Ada"));
    assert!(take(&f.log).is_empty());
    assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    assert!(!f.shell.is_open());

    // Already closed
    assert!(!f.wizard.close_requested());
    assert_eq!(cancelled.load(Ordering::SeqCst), 1);
}

#[test]
fn test_flow_branches_on_data_committed_in_on_leave() {
    const ACTION: DataKey<String> = DataKey::new("action");

    struct Choose;

    impl Screen for Choose {
        fn name(&self) -> &str {
            "Choose"
        }

        fn init_ui(&mut self, ctx: &ScreenContext) {
            ctx.set_can_go_next(false);
        }

        fn on_leave(&mut self, ctx: &ScreenContext) {
            ctx.data().insert(&ACTION, "create".to_string());
        }
    }

    struct ByAction;

    impl WizardFlow for ByAction {
        fn previous_screen(&self, current: &ScreenId, _data: &WizardData) -> Option<ScreenId> {
            (current != "choose").then(|| "choose".into())
        }

        fn next_screen(&self, current: &ScreenId, data: &WizardData) -> Option<ScreenId> {
            match (current.as_str(), data.get(&ACTION).as_deref()) {
                ("choose", Some("create")) => Some("create".into()),
                ("choose", Some("remove")) => Some("remove".into()),
                _ => None,
            }
        }

        fn finish(&mut self, _data: &WizardData) {}
    }

    init_tracing();
    let log = Log::default();
    let mut wizard = Wizard::builder("choose", ByAction, HeadlessShell::new())
        .screen(ScreenRegistration::new("choose", || Choose))
        .screen(recorder("create", &log))
        .screen(recorder("remove", &log))
        .build()
        .unwrap();
    wizard.show().unwrap();

    // Nothing chosen yet, so the flow offers no next screen
    let ctx = wizard.current_context().unwrap().clone();
    assert!(!ctx.can_go_next());

    ctx.set_can_go_next(true);
    assert!(wizard.next().unwrap());
    assert_eq!(wizard.current_screen(), Some(&"create".into()));
    assert_eq!(wizard.data().get(&ACTION).as_deref(), Some("create"));
    assert_eq!(*log.lock(), ["init:create", "enter:create"]);
}

#[test]
fn test_failed_forced_next_does_not_drop_later_requests() {
    let mut f = offline_fixture();
    f.wizard.show().unwrap();

    let ctx = f.wizard.current_context().unwrap().clone();
    ctx.set_can_finish(true);
    ctx.force_next();
    ctx.force_finish();

    let err = f.wizard.refresh().unwrap_err();
    assert!(err.is_invalid_screen());
    assert_eq!(f.wizard.status(), &WizardStatus::Finished);
    assert_eq!(f.finishes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_forced_next_still_republishes() {
    let mut f = offline_fixture();
    f.wizard.show().unwrap();
    let frames = f.shell.frame_count();

    let ctx = f.wizard.current_context().unwrap().clone();
    ctx.force_next();
    assert!(f.wizard.refresh().is_err());

    assert_eq!(f.shell.frame_count(), frames + 1);
    assert_eq!(f.shell.last_frame().unwrap().screen, "a");
}

#[test]
fn test_failed_materialization_keeps_current_screen() {
    let mut f = offline_fixture();
    f.wizard.show().unwrap();
    let frames = f.shell.frame_count();

    let err = f.wizard.next().unwrap_err();
    assert!(err.is_invalid_screen());
    assert!(err.to_string().contains("license server offline"));
    assert_eq!(f.wizard.current_screen(), Some(&"a".into()));
    assert_eq!(f.shell.frame_count(), frames);
    // on_leave already ran
    assert!(take(&f.log).contains(&"leave:a".to_string()));
}

#[test]
fn test_last_screen_cannot_go_next() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    f.wizard.next().unwrap();
    f.wizard.next().unwrap();

    assert!(!f.wizard.current_context().unwrap().can_go_next());
    assert!(!f.wizard.next().unwrap());
    assert_eq!(f.wizard.current_screen(), Some(&"c".into()));
}

#[test]
fn test_update_gui_state_is_idempotent() {
    let mut f = fixture();
    let states = Arc::new(Mutex::new(Vec::new()));
    let states_clone = states.clone();
    f.wizard.state_changed.connect(move |state: &NavigationState| {
        states_clone.lock().push(state.clone());
    });

    f.wizard.show().unwrap();
    f.wizard.update_gui_state();
    f.wizard.update_gui_state();

    let frames = f.shell.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1], frames[2]);
    assert_eq!(states.lock().len(), 3);
}

#[test]
fn test_current_screen_changed_signal() {
    let mut f = fixture();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    f.wizard.current_screen_changed.connect(move |id: &ScreenId| {
        seen_clone.lock().push(id.to_string());
    });

    f.wizard.show().unwrap();
    f.wizard.next().unwrap();
    f.wizard.previous().unwrap();

    assert_eq!(*seen.lock(), ["a", "b", "a"]);
}

#[test]
fn test_locale_switch_republishes_labels() {
    init_tracing();
    let mut langpack = Langpack::new();
    langpack.add_locale("is", &["a", "b", "c", "d"]).unwrap();

    let shell = HeadlessShell::new();
    let log = Log::default();
    let mut wizard = Wizard::builder("a", LinearFlow::new(["a"]), shell.clone())
        .langpack(langpack)
        .locale("en")
        .screen(recorder("a", &log))
        .build()
        .unwrap();
    wizard.show().unwrap();
    assert_eq!(shell.last_frame().unwrap().labels.next, "Next");

    wizard.set_locale("is");
    let labels = shell.last_frame().unwrap().labels;
    assert_eq!(labels.previous, "c");
    assert_eq!(labels.finish, "a");
}

#[test]
fn test_show_again_after_close_starts_over() {
    let mut f = fixture();
    f.wizard.show().unwrap();
    f.wizard.next().unwrap();
    assert!(f.wizard.cancel());

    f.wizard.show().unwrap();
    assert_eq!(f.wizard.current_screen(), Some(&"a".into()));
    assert_eq!(f.wizard.registry().len(), 1);
    assert_eq!(f.shell.open_count(), 2);
}
