use super::Conversation;
use super::GREETING;
use crate::domain::models::Message;
use crate::domain::models::Role;

#[test]
fn it_starts_empty() {
    let conversation = Conversation::default();
    assert!(conversation.is_empty());
    assert_eq!(conversation.len(), 0);
}

#[test]
fn it_appends_in_order() {
    let mut conversation = Conversation::default();
    conversation.push(Message::user("도서관은 몇 시까지 하나요?"));
    conversation.push(Message::assistant("오후 10시까지 운영합니다."));

    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.messages()[0].role, Role::User);
    assert_eq!(conversation.messages()[1].role, Role::Assistant);
}

#[test]
fn it_resets_to_a_single_seed() {
    for count in [0, 1, 5, 20] {
        let mut conversation = Conversation::default();
        for idx in 0..count {
            conversation.push(Message::user(&format!("question {idx}")));
            conversation.push(Message::assistant(&format!("answer {idx}")));
        }

        conversation.reset();
        assert_eq!(conversation.messages(), &[Conversation::seed()]);
    }
}

#[test]
fn it_resets_identically() {
    let mut first = Conversation::default();
    first.push(Message::user("a"));
    first.reset();

    let mut second = Conversation::default();
    second.push(Message::user("b"));
    second.push(Message::assistant("c"));
    second.reset();

    assert_eq!(first, second);
}

#[test]
fn it_seeds_with_the_greeting() {
    let seed = Conversation::seed();
    assert_eq!(seed.role, Role::Assistant);
    assert_eq!(seed.content, GREETING);
}
