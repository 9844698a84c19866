use enroll_client::app::{AppState, CourseAction, ListView, StudentRow};
use enroll_client::client::create_client;
use enroll_client::error::{ErrorKind, Result};
use enroll_client::store::MemoryStore;
use enroll_client::{App, Config};

fn log_level_from_env() -> simplelog::LevelFilter {
    use simplelog::LevelFilter;

    let mut level_string = match std::env::var("LOG_LEVEL") {
        Err(_) => return LevelFilter::Warn,
        Ok(s) => s,
    };

    level_string.make_ascii_lowercase();
    match level_string.as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

fn init_logging() {
    let log_cfg = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("enroll_client")
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        log_level_from_env(),
        log_cfg,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {e}");
    }
}

fn parse_id(arg: Option<&String>, what: &str) -> Result<u64> {
    let raw = arg.ok_or_else(|| ErrorKind::ParseError(format!("missing {what}")))?;
    raw.parse::<u64>()
        .map_err(|e| ErrorKind::ParseError(format!("Invalid {what} {raw:?}: {e}")).into())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        println!(
            "usage: {} <username> <password> [list | add <course> | remove <course> | grade <course> <row> <value>]",
            args[0]
        );
        return Ok(());
    }

    init_logging();

    let config_path = std::env::var("ENROLL_CONFIG").ok();
    let config = Config::load(config_path.as_deref().map(std::path::Path::new))?;
    let client = create_client(&config).await?;
    let mut app = App::new(client, MemoryStore::new(), config);

    let role = app.login(&args[1], &args[2]).await;
    if let Some(role) = role {
        println!("Logged in as {} ({role})", args[1]);
    }

    match args.get(3).map(String::as_str) {
        None | Some("list") => {}
        Some(cmd @ ("add" | "remove")) => {
            let course_id = parse_id(args.get(4), "course id")?;
            let wanted = if cmd == "add" {
                CourseAction::Add
            } else {
                CourseAction::Remove
            };
            match app.state().course_row(course_id).map(|r| r.action) {
                Some(action) if action == wanted => {
                    app.activate(course_id).await;
                }
                Some(action) => println!("Course {course_id} shows [{}]", action.label()),
                None => println!("No course {course_id} in the available list"),
            }
        }
        Some("grade") => {
            let course_id = parse_id(args.get(4), "course id")?;
            let row = parse_id(args.get(5), "row")? as usize;
            let value = args
                .get(6)
                .ok_or_else(|| ErrorKind::ParseError("missing grade value".to_string()))?;
            app.edit_and_submit_grade(course_id, row, value).await;
        }
        Some(other) => {
            return Err(ErrorKind::ParseError(format!("unknown command {other:?}")).into());
        }
    }

    let mut state = app.state().clone();
    print_state(&mut state);
    Ok(())
}

fn print_state(state: &mut AppState) {
    for alert in state.take_alerts() {
        println!("[alert] {alert}");
    }
    if let Some(url) = state.take_external() {
        println!("Open in browser: {url}");
    }

    if state.panels.enrolled {
        println!("==================Enrolled==================");
        match &state.enrolled {
            ListView::Items(lines) => lines.iter().for_each(|l| println!("{l}")),
            ListView::Placeholder(p) => println!("{p}"),
            ListView::Cleared => {}
        }
        match &state.teaching {
            ListView::Items(courses) => {
                for course in courses {
                    println!("[{}] {}", course.course_id, course.summary);
                    print_roster(&course.students);
                }
            }
            ListView::Placeholder(p) => println!("{p}"),
            ListView::Cleared => {}
        }
    }

    if state.panels.available {
        println!("==================Available=================");
        for row in state.available.items() {
            let marker = if row.action.enabled() { "" } else { " (disabled)" };
            println!(
                "[{:<3}] {:<20}{:<60}{:<30}[{}]{}",
                row.course_id,
                row.name,
                row.info,
                row.time,
                row.action.label(),
                marker
            );
        }
    }
    println!("============================================");
}

fn print_roster(students: &ListView<StudentRow>) {
    match students {
        ListView::Items(rows) => {
            for (i, s) in rows.iter().enumerate() {
                println!("    {i}. {} - Grade: {}", s.username, s.grade_field);
            }
        }
        ListView::Placeholder(p) => println!("    {p}"),
        ListView::Cleared => {}
    }
}
