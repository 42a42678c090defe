//! Tests for configured dispatch, including full command-log replays.

use roster::{Collection, Command, ListConfig, ListReducer, collection};

use crate::helpers::*;

fn ticket_reducer() -> ListReducer<Ticket> {
    ListReducer::new(ListConfig::new("tickets"))
}

#[test]
fn insert_at_the_head_of_a_seeded_list() {
    let reducer = ticket_reducer();
    let state = seeded(0..5);

    let next = reducer.reduce(&state, &Command::insert_item(ticket(1_000), 0));
    assert_eq!(ids(&next), vec![1_000, 0, 1, 2, 3, 4]);
    assert_eq!(ids(&state), vec![0, 1, 2, 3, 4]);
}

#[test]
fn set_list_is_a_full_replacement() {
    let reducer = ticket_reducer();
    let state = seeded(0..5);

    let next = reducer.reduce(&state, &Command::set_list(vec![ticket(0)]));
    assert_eq!(ids(&next), vec![0]);
}

#[test]
fn reset_returns_to_the_configured_initial_not_to_empty() {
    let initial = collection![titled(1, "seed")];
    let reducer = ListReducer::new(ListConfig::new("tickets").with_initial(initial.clone()));

    let state = reducer.reduce(&initial, &Command::set_list(seeded(0..10)));
    assert_eq!(state.len(), 10);

    let state = reducer.reduce(&state, &Command::reset_list());
    assert_eq!(state, initial);
}

#[test]
fn unconfigured_reducer_resets_to_empty() {
    let reducer = ticket_reducer();
    let state = seeded(0..3);
    assert!(reducer.reduce(&state, &Command::reset_list()).is_empty());
}

#[test]
fn error_flag_wins_over_every_kind() {
    let reducer = ticket_reducer();
    let state = seeded(0..3);

    let commands: Vec<Command<Ticket>> = vec![
        Command::insert_item(ticket(99), 0),
        Command::remove_item(1),
        Command::remove_item_by_key(0),
        Command::update_item(ticket(99), 0),
        Command::update_item_by_key(titled(1, "x")),
        Command::update_items_by_key([titled(0, "x")]),
        Command::reset_list(),
        Command::set_list(vec![ticket(42)]),
    ];

    for command in commands {
        let kind = command.kind();
        assert_eq!(
            reducer.reduce(&state, &command.with_error()),
            state,
            "error-flagged {kind} mutated state",
        );
    }
}

#[test]
fn commands_for_other_lists_still_apply() {
    // Dispatch ignores metadata; filtering by list is a routing concern.
    let reducer = ticket_reducer();
    let state = seeded([1]);
    let next = reducer.reduce(&state, &Command::remove_item(0).for_list("users"));
    assert!(next.is_empty());
}

#[test]
fn replaying_a_session_log() {
    let initial = collection![titled(1, "triage")];
    let reducer = ListReducer::new(ListConfig::new("tickets").with_initial(initial.clone()));

    let log: Vec<Command<Ticket>> = vec![
        Command::set_list(vec![titled(1, "triage"), titled(2, "open"), titled(3, "open")]),
        Command::insert_item(titled(4, "new"), 1),
        Command::update_item_by_key(titled(2, "closed")),
        Command::update_items_by_key([titled(1, "done"), titled(3, "done")]),
        // A failed fetch reported through the same pipeline.
        Command::set_list(Collection::new()).with_error(),
        Command::remove_item_by_key(4),
        Command::remove_item(5),
    ];

    let final_state = log
        .iter()
        .fold(reducer.initial_state(), |state, command| reducer.reduce(&state, command));

    assert_eq!(ids(&final_state), vec![1, 2, 3]);
    assert_eq!(final_state.get(0), Some(&titled(1, "done")));
    assert_eq!(final_state.get(1), Some(&titled(2, "closed")));
    assert_eq!(final_state.get(2), Some(&titled(3, "done")));

    // The same log replays to the same state.
    let replayed = log
        .iter()
        .fold(reducer.initial_state(), |state, command| reducer.reduce(&state, command));
    assert_eq!(replayed, final_state);

    // And reset still lands on the configured initial.
    assert_eq!(reducer.reduce(&final_state, &Command::reset_list()), initial);
}

#[test]
fn independent_lists_do_not_interfere() {
    let tickets = ticket_reducer();
    let archive = ListReducer::new(
        ListConfig::new("archive").with_initial(collection![titled(100, "archived")]),
    );

    let ticket_state = tickets.reduce(&tickets.initial_state(), &Command::insert_item(ticket(1), 0));
    let archive_state = archive.reduce(&archive.initial_state(), &Command::reset_list());

    assert_eq!(ids(&ticket_state), vec![1]);
    assert_eq!(ids(&archive_state), vec![100]);
}
