//! Behavioural properties of `TodoStore`, exercised through the public API.

use pretty_assertions::assert_eq;

use jot::model::todo::{StatusFilter, Todo, TodoId};
use jot::ops::TodoStore;

fn visible_ids(store: &TodoStore) -> Vec<u64> {
    store.visible_todos().iter().map(|t| t.id.get()).collect()
}

fn texts(store: &TodoStore) -> Vec<&str> {
    store.todos().iter().map(|t| t.text.as_str()).collect()
}

/// Buy milk (1), Buy eggs (2, done), Walk dog (3)
fn shopping_store() -> (TodoStore, [TodoId; 3]) {
    let mut store = TodoStore::new();
    let milk = store.add("Buy milk").unwrap();
    let eggs = store.add("Buy eggs").unwrap();
    let dog = store.add("Walk dog").unwrap();
    store.toggle(eggs);
    (store, [milk, eggs, dog])
}

#[test]
fn each_add_grows_by_one_and_starts_incomplete() {
    let mut store = TodoStore::new();
    let inputs = ["first", "  second  ", "third\tnote", "x"];
    for (i, text) in inputs.iter().enumerate() {
        let id = store.add(text).unwrap();
        assert_eq!(store.len(), i + 1);
        let todo = store.get(id).unwrap();
        assert!(!todo.completed);
        assert_eq!(todo.text, text.trim());
    }
    assert_eq!(texts(&store), vec!["first", "second", "third\tnote", "x"]);
}

#[test]
fn blank_add_never_changes_length() {
    let mut store = TodoStore::new();
    store.add("keep");
    for blank in ["", "   ", "\t", " \n "] {
        assert_eq!(store.add(blank), None);
        assert_eq!(store.len(), 1);
    }
}

#[test]
fn toggle_twice_restores_completion() {
    let (mut store, ids) = shopping_store();
    for id in ids {
        let before = store.get(id).unwrap().completed;
        assert!(store.toggle(id));
        assert_eq!(store.get(id).unwrap().completed, !before);
        assert!(store.toggle(id));
        assert_eq!(store.get(id).unwrap().completed, before);
    }
}

#[test]
fn delete_removes_one_and_keeps_order() {
    let (mut store, [milk, eggs, dog]) = shopping_store();

    let removed = store.delete(eggs).unwrap();
    assert_eq!(removed.text, "Buy eggs");
    assert_eq!(store.len(), 2);
    assert_eq!(texts(&store), vec!["Buy milk", "Walk dog"]);

    assert_eq!(store.delete(eggs), None);
    assert_eq!(store.len(), 2);
    assert!(store.get(milk).is_some());
    assert!(store.get(dog).is_some());
}

#[test]
fn edit_trims_and_ignores_blank() {
    let (mut store, [milk, _, _]) = shopping_store();

    assert!(!store.edit(milk, ""));
    assert_eq!(store.get(milk).unwrap().text, "Buy milk");

    assert!(store.edit(milk, "  new  "));
    assert_eq!(store.get(milk).unwrap().text, "new");
    assert_eq!(texts(&store)[0], "new");
}

#[test]
fn unfiltered_view_is_full_sequence() {
    let (store, _) = shopping_store();
    let visible: Vec<Todo> = store.visible_todos().into_iter().cloned().collect();
    assert_eq!(visible, store.todos().to_vec());
}

#[test]
fn search_filter_and_toggle_scenario() {
    let (mut store, [milk, _, _]) = shopping_store();

    store.set_search_query("buy");
    assert_eq!(store.query().status_filter, StatusFilter::All);
    assert_eq!(visible_ids(&store), vec![1, 2]);

    store.set_status_filter("INCOMPLETE".parse().unwrap());
    assert_eq!(visible_ids(&store), vec![1]);

    store.toggle(milk);
    assert_eq!(visible_ids(&store), Vec::<u64>::new());
}

#[test]
fn malformed_filter_is_rejected() {
    let (mut store, _) = shopping_store();
    store.set_status_filter(StatusFilter::Complete);
    assert!("DONE".parse::<StatusFilter>().is_err());
    assert_eq!(store.query().status_filter, StatusFilter::Complete);
}

#[test]
fn repeated_reads_are_identical() {
    let (mut store, _) = shopping_store();
    store.set_search_query("o");
    store.set_status_filter(StatusFilter::Incomplete);

    let first: Vec<Todo> = store.visible_todos().into_iter().cloned().collect();
    for _ in 0..3 {
        let again: Vec<Todo> = store.visible_todos().into_iter().cloned().collect();
        assert_eq!(again, first);
    }
}

#[test]
fn ids_are_unique_after_delete() {
    let mut store = TodoStore::new();
    let a = store.add("a").unwrap();
    store.delete(a);
    let b = store.add("b").unwrap();
    assert_ne!(a, b);
}
