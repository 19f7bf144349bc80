use super::BubbleList;
use crate::domain::models::Author;
use crate::domain::models::Entry;
use crate::domain::models::EntryKind;

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::default();

    assert_eq!(bubble_list.cache.len(), 0);
    assert!(bubble_list.is_empty());
}

#[test]
fn it_caches_lines() {
    let entries = vec![
        Entry::new(Author::App, "Hi there!"),
        Entry::new(Author::Assistant, "first\nsecond"),
    ];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_entries(&entries, 50);

    assert_eq!(bubble_list.cache.len(), 2);
}

#[test]
fn it_returns_correct_length() {
    let entries = vec![
        Entry::new(Author::App, "Hi there!"),
        Entry::new(Author::Assistant, "first\nsecond"),
    ];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_entries(&entries, 50);

    // Top and bottom borders around each entry's lines.
    assert_eq!(bubble_list.len(), 3 + 4);
}

#[test]
fn it_refreshes_replaced_entries() {
    let mut entries = vec![Entry::new_with_kind(
        Author::Assistant,
        EntryKind::Pending,
        "🤔 생각 중...",
    )];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_entries(&entries, 50);
    assert_eq!(bubble_list.len(), 3);

    entries[0] = Entry::new(Author::Assistant, "one\ntwo\nthree");
    bubble_list.set_entries(&entries, 50);
    assert_eq!(bubble_list.len(), 5);
    assert_eq!(bubble_list.cache.get(&0).unwrap().entry, entries[0]);
}

#[test]
fn it_drops_removed_entries() {
    let entries = vec![
        Entry::new(Author::App, "a"),
        Entry::new(Author::App, "b"),
        Entry::new(Author::App, "c"),
    ];

    let mut bubble_list = BubbleList::default();
    bubble_list.set_entries(&entries, 50);
    assert_eq!(bubble_list.cache.len(), 3);

    bubble_list.set_entries(&entries[..1], 50);
    assert_eq!(bubble_list.cache.len(), 1);
    assert_eq!(bubble_list.len(), 3);
}
