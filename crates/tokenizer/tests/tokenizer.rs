use subword_tokenizer::{Tokenizer, TokenizerError, UnmatchedPolicy};

const CORPUS: [&str; 5] = [
    "low low low low low",
    "lowest lowest",
    "newer newer newer newer newer newer",
    "wider wider wider",
    "new new",
];

fn train(texts: &[&str], vocab_size: usize) -> Tokenizer {
    let mut tokenizer = Tokenizer::builder()
        .vocab_size(vocab_size)
        .build()
        .expect("valid config");
    tokenizer.train(texts).expect("training succeeds");
    tokenizer
}

#[test]
fn test_first_merge_is_er() {
    let tokenizer = train(&CORPUS, 14 + 3);
    let model = tokenizer.model();

    let first = model.merges.iter().next().expect("at least one merge");
    assert_eq!(first.frequency, 9);
    assert_eq!(tokenizer.id_to_token(first.new_token_id), Some("er"));
    assert_eq!(model.num_merges(), 3);
}

#[test]
fn test_unknown_run_encodes_as_unknown() {
    let tokenizer = train(&["ab ab ab"], 100);
    let unk = tokenizer.token_to_id("<unk>").unwrap();

    // a, b and the four markers, plus the learned "ab"
    assert_eq!(tokenizer.vocab_size(), 7);
    assert_eq!(tokenizer.encode("zzz").unwrap(), vec![unk]);
    assert_eq!(tokenizer.encode("zz ab zz").unwrap(), vec![unk, unk, 6, unk, unk]);
}

#[test]
fn test_boundary_target_keeps_initial_alphabet() {
    let tokenizer = train(&CORPUS, 3);
    let model = tokenizer.model();

    assert!(model.merges.is_empty());
    let mut symbols: Vec<&str> = model.vocab.iter().map(|(s, _)| s).collect();
    symbols.sort_unstable();
    assert_eq!(
        symbols,
        vec!["</s>", "<pad>", "<s>", "<unk>", "d", "e", "i", "l", "n", "o", "r", "s", "t", "w"]
    );
}

#[test]
fn test_round_trip_over_training_alphabet() {
    let tokenizer = train(&CORPUS, 25);
    let text = "lowest  wider\tnewer lower wide";

    let ids = tokenizer.encode(text).unwrap();
    let tokens = tokenizer.tokenize(text).unwrap();
    assert_eq!(ids.len(), tokens.len());

    let rebuilt: String = ids
        .iter()
        .zip(&tokens)
        .filter(|(_, token)| !token.trim().is_empty())
        .map(|(&id, _)| tokenizer.id_to_token(id).unwrap())
        .collect();
    let expected: String = text.split_whitespace().collect();
    assert_eq!(rebuilt, expected);
}

#[test]
fn test_identical_training_runs_agree() {
    let a = train(&CORPUS, 30);
    let b = train(&CORPUS, 30);

    assert_eq!(a.model(), b.model());
    assert_eq!(
        a.tokenize("newest wider").unwrap(),
        b.tokenize("newest wider").unwrap()
    );
}

#[test]
fn test_save_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let tokenizer = train(&CORPUS, 30);
    tokenizer.save(dir.path()).unwrap();

    let loaded = Tokenizer::load(dir.path()).unwrap();
    assert!(loaded.is_ready());
    assert_eq!(loaded.model().vocab, tokenizer.model().vocab);
    assert_eq!(loaded.model().vocab_size, 30);

    let original: Vec<_> = tokenizer.model().merge_symbols().collect();
    let restored: Vec<_> = loaded.model().merge_symbols().collect();
    assert_eq!(original, restored);

    let text = "lowest newer wider zebra";
    assert_eq!(loaded.encode(text).unwrap(), tokenizer.encode(text).unwrap());
}

#[test]
fn test_load_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(matches!(
        Tokenizer::load(&missing),
        Err(TokenizerError::Io { .. })
    ));
}

#[test]
fn test_concurrent_encoding_of_shared_tokenizer() {
    let tokenizer = train(&CORPUS, 30).with_unmatched_policy(UnmatchedPolicy::Drop);
    let expected = tokenizer.encode("newer lowest").unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(tokenizer.encode("newer lowest").unwrap(), expected);
            });
        }
    });
}
