mod utils;

use interview::{
    Confirm, Error, GroupMultiSelect, GroupedOpts, MultiSelect, Opt, Outcome, Password,
    Select, SelectKey, Session,
};
use utils::ScriptedBackend;

#[test]
fn test_select_maps_the_picked_index_to_its_value() {
    let session =
        Session::with_backend(ScriptedBackend::new().select(Outcome::Value(1)));

    let flavor = Select::new("Pick a flavor")
        .option(Opt::new("bin", "Binary"))
        .option(Opt::new("lib", "Library"))
        .prompt(&session)
        .unwrap();

    assert_eq!(flavor, "lib");
}

#[test]
fn test_select_key_picks_by_shortcut() {
    let session =
        Session::with_backend(ScriptedBackend::new().select(Outcome::Value(0)));

    let answer = SelectKey::new("Continue?")
        .option(Opt::new("y", "Yes"))
        .option(Opt::new("n", "No"))
        .prompt(&session)
        .unwrap();

    assert_eq!(answer, "y");
}

#[test]
fn test_select_key_rejects_values_unusable_as_shortcuts() {
    let session = Session::with_backend(ScriptedBackend::new());

    let err = SelectKey::new("Continue?")
        .option(Opt::new("yes", "Yes"))
        .prompt(&session)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn test_multi_select_maps_indices_to_values() {
    let session = Session::with_backend(
        ScriptedBackend::new().multi_select(Outcome::Value(vec![0, 2])),
    );

    let tools = MultiSelect::new("Tools")
        .options(vec![Opt::of("cargo"), Opt::of("make"), Opt::of("just")])
        .prompt(&session)
        .unwrap();

    assert_eq!(tools, vec!["cargo", "just"]);
}

#[test]
fn test_group_multi_select_expands_headers_to_their_leaves() {
    // Rows: 0 "build" header, 1 cargo, 2 make, 3 "test" header, 4 nextest.
    let session = Session::with_backend(
        ScriptedBackend::new().multi_select(Outcome::Value(vec![0, 4])),
    );

    let tools = GroupMultiSelect::new("Tools")
        .options(
            GroupedOpts::new()
                .group("build", vec![Opt::of("cargo"), Opt::of("make")])
                .group("test", vec![Opt::of("nextest")]),
        )
        .prompt(&session)
        .unwrap();

    assert_eq!(tools, vec!["cargo", "make", "nextest"]);
}

#[test]
fn test_group_multi_select_deduplicates_header_and_leaf_picks() {
    let session = Session::with_backend(
        ScriptedBackend::new().multi_select(Outcome::Value(vec![0, 1])),
    );

    let tools = GroupMultiSelect::new("Tools")
        .options(GroupedOpts::new().group("build", vec![Opt::of("cargo"), Opt::of("make")]))
        .prompt(&session)
        .unwrap();

    assert_eq!(tools, vec!["cargo", "make"]);
}

#[test]
fn test_password_returns_the_submitted_value() {
    let session = Session::with_backend(
        ScriptedBackend::new().password(Outcome::Value("hunter2")),
    );

    let secret = Password::new("Token").prompt(&session).unwrap();
    assert_eq!(secret, "hunter2");
}

#[test]
fn test_confirm_value_flows_through_the_formatter() {
    let session =
        Session::with_backend(ScriptedBackend::new().confirm(Outcome::Value(true)));

    let answer = Confirm::new("Install?")
        .prompt_map(&session, |yes| if yes { "install" } else { "skip" })
        .unwrap();

    assert_eq!(answer, "install");
}

#[test]
fn test_cancelled_prompt_with_handler_is_observable() {
    let backend = ScriptedBackend::new().select(Outcome::Cancelled);
    let mut session = Session::with_backend(backend);
    session.on_cancel(|| {});

    let outcome = Select::new("Pick a flavor")
        .option(Opt::new("bin", "Binary"))
        .run(&session)
        .unwrap();

    assert!(outcome.is_cancelled());
}
