use furiyomi::analyzer::memory::TableSegmenter;
use furiyomi::known::KnownDatabase;
use furiyomi::store::fs_backend::FsBackend;
use furiyomi::store::Mutation;
use std::fs;
use std::path::Path;

fn segmenter() -> TableSegmenter {
    TableSegmenter::new()
        .with_word("今日", "今日", "キョウ")
        .with_word("天気", "天気", "テンキ")
        .with_word("いい", "いい", "イイ")
        .with_word("雨", "雨", "アメ")
        .with_word("降る", "降る", "フル")
        .with_word("降った", "降る", "フッタ")
}

fn open(dir: &Path) -> KnownDatabase<TableSegmenter, FsBackend> {
    KnownDatabase::open(FsBackend::new(dir.to_path_buf()), segmenter()).unwrap()
}

fn temp_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect()
}

#[test]
fn test_study_session_on_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();
    fs::write(data.join("anki.txt"), "今日[きょう]は<br>\n天気\n").unwrap();

    let mut db = open(data);
    db.process_subtitles(vec!["今日は雨が降った".into(), "いい天気".into()])
        .unwrap();
    assert_eq!(
        db.highlight("今日は雨が降った", "<{}>").unwrap(),
        "今日は<雨><が><降った>"
    );

    assert_eq!(db.mark("雨が降る").unwrap(), Mutation::Changed);
    assert_eq!(
        db.highlight("今日は雨が降った", "<{}>").unwrap(),
        "今日は雨が降った"
    );
    assert_eq!(db.highlight_stats("いい天気").unwrap(), (2, 4));

    assert_eq!(
        fs::read_to_string(data.join("marked.txt")).unwrap(),
        "雨が降る\n"
    );
    assert_eq!(
        fs::read_to_string(data.join("marked.trimmed.txt")).unwrap(),
        "雨が降る\n"
    );
    assert!(temp_files(data).is_empty());
}

#[test]
fn test_marked_line_is_trimmed_once_queued_words_cover_it() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();
    fs::write(data.join("marked.txt"), "雨\n\n今日は雨\n").unwrap();

    let mut db = open(data);
    assert_eq!(db.trimmed(), ["雨", "今日は雨"]);

    db.enqueue("雨").unwrap();
    assert_eq!(db.trimmed(), ["今日は雨"]);

    db.enqueue("今日は").unwrap();
    assert!(db.trimmed().is_empty());
    assert_eq!(
        fs::read_to_string(data.join("marked.trimmed.txt")).unwrap(),
        "\n"
    );

    let reopened = open(data);
    assert_eq!(reopened.queue().entries(), ["雨", "今日は"]);
    assert_eq!(reopened.known_count(), db.known_count());
}
