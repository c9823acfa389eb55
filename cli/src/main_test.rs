use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("insper-admin").chain(args.iter().copied())).expect("parse")
}

#[test]
fn command_tree_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn global_flags_precede_subcommand() {
    let cli = parse(&["--api-url", DEFAULT_API_URL, "whoami"]);
    assert_eq!(cli.api_url, "http://localhost:5000/api");
    assert!(matches!(cli.command, Command::Whoami));
}

#[test]
fn nested_subcommands_parse() {
    let cli = parse(&["events", "update", "42", "--data", r#"{"destaque":true}"#]);
    let Command::Events(EventsCommand { command: EventsSubcommand::Update { id, data } }) = cli.command else {
        panic!("expected events update");
    };
    assert_eq!(id, "42");
    assert_eq!(data, r#"{"destaque":true}"#);
}

#[test]
fn role_accepts_backend_spelling() {
    let cli = parse(&["admins", "create", "--name", "Bia", "--email", "bia@x.io", "--password", "12345678", "--role", "super_admin"]);
    let Command::Admins(AdminsCommand { command: AdminsSubcommand::Create { role, .. } }) = cli.command else {
        panic!("expected admins create");
    };
    assert_eq!(Role::from(role), Role::SuperAdmin);
}

#[test]
fn message_flags_take_explicit_booleans() {
    let cli = parse(&["messages", "mark", "m1", "--read", "true"]);
    let Command::Messages(MessagesCommand { command: MessagesSubcommand::Mark { read, answered, .. } }) = cli.command else {
        panic!("expected messages mark");
    };
    assert_eq!(read, Some(true));
    assert_eq!(answered, None);
}

#[test]
fn auth_errors_display_backend_message() {
    let err = CliError::from(AuthError::Request(RequestError::backend(401, "Invalid credentials")));
    assert_eq!(err.to_string(), "Invalid credentials");
}
