//! A console-driven wizard.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=horizon_wizard=debug cargo run -p horizon-wizard --example console
//! ```
//!
//! Commands: `n` next, `p` previous, `c` cancel, `f` finish, `q` close the
//! window, anything else is typed into the current screen.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use horizon_wizard::prelude::*;

const ACTION: DataKey<String> = DataKey::new("action");
const USER_NAME: DataKey<String> = DataKey::new("user_name");

/// Prints every frame instead of drawing it.
struct ConsoleShell;

impl PresentationShell for ConsoleShell {
    fn open(&mut self, chrome: &ShellChrome) {
        println!("=== {} ({}x{}) ===", chrome.title, chrome.size.0, chrome.size.1);
    }

    fn publish(&mut self, frame: &ShellFrame) {
        let nav = &frame.navigation;
        let button = |label: &str, enabled: bool| {
            if enabled { format!("[{label}]") } else { format!(" {label} ") }
        };

        println!();
        println!("## {}", frame.header.title);
        if let Some(subtitle) = &frame.header.subtitle {
            println!("   {subtitle}");
        }
        if let Some(problem) = &nav.problem {
            println!("!! {problem}");
        }
        println!(
            "{} {} {} {}",
            button(&frame.labels.previous, nav.can_go_previous),
            button(&frame.labels.next, nav.can_go_next),
            button(&frame.labels.finish, nav.can_finish),
            button(&frame.labels.cancel, nav.can_cancel),
        );
    }

    fn close(&mut self) {
        println!("=== closed ===");
    }
}

/// Branches on the chosen action.
struct AccountFlow;

impl WizardFlow for AccountFlow {
    fn previous_screen(&self, current: &ScreenId, _data: &WizardData) -> Option<ScreenId> {
        match current.as_str() {
            "name" | "remove" => Some("action".into()),
            "provision" => Some("name".into()),
            _ => None,
        }
    }

    fn next_screen(&self, current: &ScreenId, data: &WizardData) -> Option<ScreenId> {
        match current.as_str() {
            "action" => match data.get(&ACTION).as_deref() {
                Some("remove") => Some("remove".into()),
                _ => Some("name".into()),
            },
            "name" => Some("provision".into()),
            "provision" => Some("done".into()),
            _ => None,
        }
    }

    fn finish(&mut self, data: &WizardData) {
        println!(
            "Finished: action={:?} user={:?}",
            data.get(&ACTION),
            data.get(&USER_NAME)
        );
    }

    fn on_cancel(&mut self, _data: &WizardData) -> bool {
        println!("Cancelled.");
        true
    }
}

/// Screens that accept a line of console input.
trait ConsoleInput {
    fn input(&self, line: &str);
}

#[derive(Default)]
struct ActionScreen {
    ctx: Option<ScreenContext>,
}

impl Screen for ActionScreen {
    fn name(&self) -> &str {
        "Choose an action"
    }

    fn description(&self) -> Option<&str> {
        Some("Type 'create' or 'remove'")
    }

    fn init_ui(&mut self, ctx: &ScreenContext) {
        ctx.data().insert(&ACTION, "create".to_string());
        self.ctx = Some(ctx.clone());
    }
}

impl ConsoleInput for ActionScreen {
    fn input(&self, line: &str) {
        let Some(ctx) = &self.ctx else { return };
        match line {
            "create" | "remove" => {
                ctx.data().insert(&ACTION, line.to_string());
                ctx.clear_problem();
            }
            _ => ctx.set_problem(Some(format!("Unknown action '{line}'"))),
        }
    }
}

#[derive(Default)]
struct NameScreen {
    ctx: Option<ScreenContext>,
}

impl Screen for NameScreen {
    fn name(&self) -> &str {
        "User name"
    }

    fn description(&self) -> Option<&str> {
        Some("Type the name of the new account")
    }

    fn init_ui(&mut self, ctx: &ScreenContext) {
        ctx.set_problem(Some("Please enter a name".into()));
        self.ctx = Some(ctx.clone());
    }
}

impl ConsoleInput for NameScreen {
    fn input(&self, line: &str) {
        let Some(ctx) = &self.ctx else { return };
        ctx.data().insert(&USER_NAME, line.to_string());
        ctx.clear_problem();
    }
}

/// Simulates provisioning on a worker thread, then moves on by itself.
#[derive(Default)]
struct ProvisionScreen;

impl Screen for ProvisionScreen {
    fn name(&self) -> &str {
        "Provisioning"
    }

    fn description(&self) -> Option<&str> {
        Some("Please wait...")
    }

    fn init_ui(&mut self, _ctx: &ScreenContext) {}

    fn on_enter(&mut self, ctx: &ScreenContext) {
        ctx.set_can_go_next(false);
        ctx.set_can_go_previous(false);
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(800));
            ctx.set_can_go_next(true);
            ctx.force_next();
        });
    }
}

struct SummaryScreen {
    title: &'static str,
}

impl Screen for SummaryScreen {
    fn name(&self) -> &str {
        self.title
    }

    fn description(&self) -> Option<&str> {
        Some("Press 'f' to finish")
    }

    fn init_ui(&mut self, ctx: &ScreenContext) {
        ctx.set_can_finish(true);
    }
}

fn catalog() -> ScreenCatalog {
    ScreenCatalog::new()
        .with(ScreenRegistration::of::<ActionScreen>("action").as_clear_point())
        .with(ScreenRegistration::of::<NameScreen>("name"))
        .with(ScreenRegistration::of::<ProvisionScreen>("provision"))
        .with(ScreenRegistration::new("remove", || SummaryScreen {
            title: "Remove account",
        }))
        .with(ScreenRegistration::new("done", || SummaryScreen {
            title: "Account created",
        }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut wizard = Wizard::builder("action", AccountFlow, ConsoleShell)
        .name("Account wizard")
        .catalog(catalog())
        .build()?;

    wizard.current_screen_changed.connect(|id: &ScreenId| {
        tracing::info!(screen = %id, "screen changed");
    });

    wizard.show()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while wizard.is_showing() {
        if wizard.current_screen().is_some_and(|id| id == "provision") {
            std::thread::sleep(Duration::from_millis(100));
            wizard.refresh()?;
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();

        match line {
            "n" => {
                wizard.next()?;
            }
            "p" => {
                wizard.previous()?;
            }
            "c" => {
                wizard.cancel();
            }
            "f" => {
                wizard.finish();
            }
            "q" => {
                wizard.close_requested();
            }
            text => route_input(&wizard, text),
        }
        wizard.refresh()?;
    }

    println!("cancelled: {}", wizard.was_cancelled());
    Ok(())
}

/// Screens are owned by the wizard, so typed text goes to a handler sharing
/// the current screen's context.
fn route_input(wizard: &Wizard, text: &str) {
    let (Some(id), Some(ctx)) = (wizard.current_screen(), wizard.current_context()) else {
        return;
    };
    let handler: Box<dyn ConsoleInput> = match id.as_str() {
        "action" => Box::new(ActionScreen {
            ctx: Some(ctx.clone()),
        }),
        "name" => Box::new(NameScreen {
            ctx: Some(ctx.clone()),
        }),
        _ => return,
    };
    handler.input(text);
}
