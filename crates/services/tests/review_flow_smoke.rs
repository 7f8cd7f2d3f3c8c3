//! End-to-end smoke test over in-memory services: seed a word book, walk a
//! flashcard session to completion, and check the surrounding tabs.

use services::{AppServices, PracticeTopic};
use vocab_core::model::{Phonetic, ReviewMode, WordId};
use vocab_core::time::fixed_clock;

async fn seeded_services() -> AppServices {
    let services = AppServices::in_memory(fixed_clock());
    let words = services.words();
    for (word, us, uk) in [
        ("painless", "/ˈpeɪnləs/", "/ˈpeɪnləs/"),
        ("example", "/ɪɡˈzæmpəl/", "/ɪɡˈzɑːmpl/"),
        ("vaccination", "/ˌvæksɪˈneɪʃn/", "/ˌvæksɪˈneɪʃn/"),
    ] {
        words.add_word(word, Phonetic::new(us, uk)).await.unwrap();
    }
    services
}

#[tokio::test]
async fn flashcard_walkthrough_marks_and_persists_every_word() {
    let services = seeded_services().await;
    let review = services.review();

    let mut session = review.start_session().await.unwrap();
    session.start_mode(ReviewMode::Flashcard);

    while session.mode().is_some() {
        let id = session.current_word().map(|word| word.id()).unwrap();
        session.toggle_reveal();
        session.mark_reviewed(id);
        review.persist_reviewed(&session, id).await.unwrap();
        session.advance();
    }

    assert_eq!(session.progress_percent(), 100);
    assert_eq!(review.due_count().await.unwrap(), 0);

    // A reload sees the persisted flags.
    let reloaded = review.start_session().await.unwrap();
    assert_eq!(reloaded.reviewed_count(), 3);
}

#[tokio::test]
async fn marking_one_word_moves_progress_by_a_third() {
    let services = seeded_services().await;
    let review = services.review();

    let mut session = review.start_session().await.unwrap();
    session.mark_reviewed(WordId::new(1));
    assert_eq!(session.progress_percent(), 33);

    // Marking the same word again changes nothing.
    session.mark_reviewed(WordId::new(1));
    assert_eq!(session.progress_percent(), 33);
}

#[tokio::test]
async fn practice_and_chat_answer_offline() {
    let services = seeded_services().await;

    let reply = services
        .practice()
        .generate("painless", PracticeTopic::Phrase)
        .await
        .unwrap();
    assert!(reply.contains("painless procedure"));

    let mut chat = services.open_chat();
    assert!(chat.send("painless 怎么用？").await.unwrap());
    assert_eq!(chat.messages().len(), 4);
}

#[tokio::test]
async fn test_tab_grades_a_full_sitting() {
    let services = seeded_services().await;
    let mut sitting = services.tests().start_sitting().unwrap();

    for _ in 0..sitting.paper().len() {
        let correct = sitting.current_question().correct_index();
        sitting.select(correct);
        assert!(sitting.submit_current().unwrap().correct);
        sitting.next_question();
    }

    assert_eq!(sitting.score(), 3);
}
