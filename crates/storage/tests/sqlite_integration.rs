use storage::repository::{AppSettingsRepository, WordRepository};
use storage::sqlite::SqliteRepository;
use vocab_core::model::{
    AccentPreference, AppSettingsDraft, Phonetic, WordDraft, WordEntry, WordId,
};

fn build_word(id: u64, text: &str, us: &str, uk: &str) -> WordEntry {
    WordDraft::new(text, Phonetic::new(us, uk))
        .validate(WordId::new(id))
        .unwrap()
}

#[tokio::test]
async fn sqlite_word_roundtrip_preserves_phonetics_and_flag() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_words?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let entry = build_word(1, "painless", "/ˈpeɪnləs/", "/ˈpeɪnləs/");
    repo.upsert_word(&entry).await.unwrap();

    let reviewed =
        WordEntry::from_persisted(entry.id(), entry.word(), entry.phonetic().clone(), true)
            .unwrap();
    repo.upsert_word(&reviewed).await.unwrap();

    let words = repo.list_words().await.unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word(), "painless");
    assert_eq!(words[0].phonetic().uk, "/ˈpeɪnləs/");
    assert!(words[0].reviewed());
}

#[tokio::test]
async fn sqlite_list_orders_by_id_and_search_filters() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_search?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.upsert_word(&build_word(2, "example", "/ɪɡˈzæmpəl/", "/ɪɡˈzɑːmpl/"))
        .await
        .unwrap();
    repo.upsert_word(&build_word(1, "painless", "/ˈpeɪnləs/", "/ˈpeɪnləs/"))
        .await
        .unwrap();
    repo.upsert_word(&build_word(3, "unpleasant", "/ʌnˈpleznt/", "/ʌnˈpleznt/"))
        .await
        .unwrap();

    let words = repo.list_words().await.unwrap();
    let ordered: Vec<&str> = words.iter().map(WordEntry::word).collect();
    assert_eq!(ordered, vec!["painless", "example", "unpleasant"]);

    let hits = repo.search_words("pleas").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].word(), "unpleasant");
}

#[tokio::test]
async fn sqlite_settings_roundtrip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_settings?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.get_settings().await.unwrap().is_none());

    let settings = AppSettingsDraft {
        api_key: Some("sk-test".into()),
        api_base_url: Some("https://api.example.com/v1".into()),
        accent: AccentPreference::Uk,
        daily_goal: 25,
        night_mode: true,
        ..AppSettingsDraft::default()
    }
    .validate()
    .unwrap();
    repo.save_settings(&settings).await.unwrap();

    let loaded = repo.get_settings().await.unwrap().expect("settings row");
    assert_eq!(loaded, settings);
    assert_eq!(loaded.api_key(), Some("sk-test"));
    assert_eq!(loaded.accent(), AccentPreference::Uk);
    assert_eq!(loaded.daily_goal(), 25);
    assert!(loaded.night_mode());

    // Saving again replaces the single row.
    let defaults = vocab_core::model::AppSettings::default();
    repo.save_settings(&defaults).await.unwrap();
    assert_eq!(repo.get_settings().await.unwrap(), Some(defaults));
}
