//! Scripted sessions against the planner shell.

use arena_planner::{parse_games, Console, PlannerConfig};
use arena_seeker::{QueryEngine, State};

// ============================================================================
// Fixtures
// ============================================================================

const CATALOG: &str = "\
objectname,objectid,average,avgweight,rank,minplayers,maxplayers,minplaytime,maxplaytime,yearpublished
Go,188,7.6,3.9,250,2,2,30,180,-2200
Go Fish,8,4.2,1.0,12000,2,6,10,15,1850
Chess,171,7.0,3.7,400,2,2,10,120,1475
Catan,13,7.1,2.3,300,3,4,60,120,1995
Azul,230802,7.8,1.8,80,2,4,30,45,2017
";

struct Session {
    output: String,
    list: Vec<String>,
    state: State,
}

fn run_with(config: PlannerConfig, script: &str) -> Session {
    let engine = QueryEngine::new(parse_games(CATALOG.as_bytes()).unwrap());
    let mut out = Vec::new();
    let mut console = Console::new(engine, config, script.as_bytes(), &mut out);
    console.run().unwrap();

    let list = console.list().names().into_iter().map(String::from).collect();
    let state = console.engine().state();
    Session {
        output: String::from_utf8(out).unwrap(),
        list,
        state,
    }
}

fn run(script: &str) -> Session {
    run_with(PlannerConfig::default(), script)
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn greets_and_says_goodbye() {
    let session = run("exit\n");
    assert!(session.output.starts_with("******* Welcome"));
    assert!(session
        .output
        .ends_with("Thank you for using the BoardGame Arena Planner!\n"));
}

#[test]
fn empty_line_exits() {
    let session = run("\nfilter\n");
    assert!(!session.output.contains("No filter given"));
    assert!(session.output.contains("Thank you"));
}

#[test]
fn end_of_input_exits() {
    let session = run("filter name==chess");
    assert!(session.output.contains("1: Chess\n"));
    assert!(session.output.contains("Thank you"));
}

#[test]
fn unknown_command() {
    let session = run("dance\nexit\n");
    assert!(session.output.contains("Invalid command."));
}

#[test]
fn help_topics() {
    let session = run("help\n?\nhelp filter\nHELP LIST\n\n");
    assert_eq!(session.output.matches("Commands:").count(), 2);
    assert!(session.output.contains("Operators:"));
    assert!(session.output.contains("list save [file]"));
}

// ============================================================================
// filter
// ============================================================================

#[test]
fn filter_prints_numbered_results() {
    let session = run("filter name~=go\n");
    assert!(session.output.contains("1: Go\n2: Go Fish\n"));
    assert!(!session.output.contains("Chess"));
}

#[test]
fn filter_with_sort_clause_shows_sort_value() {
    let session = run("filter maxPlayers<=4, sort:rating:desc\n");
    assert!(session.output.contains(
        "1: Azul (rating: 7.8)\n\
         2: Go (rating: 7.6)\n\
         3: Catan (rating: 7.1)\n\
         4: Chess (rating: 7.0)\n"
    ));
}

#[test]
fn bare_filter_shows_everything() {
    let session = run("filter\n");
    assert!(session.output.contains("No filter given"));
    assert!(session
        .output
        .contains("1: Azul\n2: Catan\n3: Chess\n4: Go\n5: Go Fish\n"));
}

#[test]
fn filter_clear_resets_engine() {
    let session = run("filter rating>7\nfilter CLEAR\n");
    assert!(session.output.contains("Filter cleared."));
    assert_eq!(session.state, State::Fresh);

    let session = run("filter rating>7\n");
    assert_eq!(session.state, State::Filtered);
}

#[test]
fn filter_question_mark_shows_help() {
    let session = run("filter ?\n");
    assert!(session.output.contains("Operators:"));
    assert_eq!(session.state, State::Fresh);
}

#[test]
fn command_words_ignore_case() {
    let session = run("FILTER name==chess\nList Add ALL\n");
    assert!(session.output.contains("1: Chess\n"));
    assert_eq!(session.list, ["Chess"]);
}

// ============================================================================
// list
// ============================================================================

#[test]
fn list_add_uses_last_filter_results() {
    let session = run("filter name~=go\nlist add all\n");
    assert_eq!(session.list, ["Go", "Go Fish"]);
}

#[test]
fn list_add_by_position_follows_result_order() {
    let session = run("filter sort:rating:desc\nlist add 1\nlist add 4-5\n");
    assert_eq!(session.list, ["Azul", "Chess", "Go Fish"]);
}

#[test]
fn list_add_without_filter_uses_full_catalog() {
    let session = run("list add 2\nlist add go fish\n");
    assert_eq!(session.list, ["Catan", "Go Fish"]);
}

#[test]
fn list_add_errors_are_reported() {
    let session = run("list add 9\nlist add Monopoly\nlist add\n");
    assert!(session.output.contains("Could not add '9'"));
    assert!(session.output.contains("Could not add 'Monopoly'"));
    assert!(session.list.is_empty());
}

#[test]
fn list_show_and_remove() {
    let session = run("list\nlist add all\nlist remove 1\nlist remove chess\nlist show\n");
    assert!(session.output.contains("Your game list is empty."));
    assert!(session.output.contains("1: Catan\n2: Go\n3: Go Fish\n"));
    assert_eq!(session.list, ["Catan", "Go", "Go Fish"]);
}

#[test]
fn list_remove_errors_are_reported() {
    let session = run("list add all\nlist remove Monopoly\nlist remove 3-1\n");
    assert!(session.output.contains("Could not remove 'Monopoly'"));
    assert!(session.output.contains("Could not remove '3-1'"));
    assert_eq!(session.list.len(), 5);
}

#[test]
fn list_clear() {
    let session = run("list add all\nlist clear\n");
    assert!(session.list.is_empty());
}

#[test]
fn list_unknown_subcommand_shows_help() {
    let session = run("list shuffle\n");
    assert!(session.output.contains("Invalid command."));
    assert!(session.output.contains("list add <games>"));
}

#[test]
fn list_save_to_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("picks.txt");
    let config = PlannerConfig::default().with_list_file(&path);

    let session = run_with(config, "filter name~=go\nlist add all\nlist save\n");
    assert!(session
        .output
        .contains(&format!("Game list saved to {}", path.display())));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Go\nGo Fish\n");
}

#[test]
fn list_save_to_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tonight.txt");

    let script = format!("list add azul\nlist save {}\n", path.display());
    run(&script);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Azul\n");
}

#[test]
fn list_save_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("list.txt");

    let script = format!("list add all\nlist save {}\n", path.display());
    let session = run(&script);
    assert!(session.output.contains("Error saving game list"));
}
