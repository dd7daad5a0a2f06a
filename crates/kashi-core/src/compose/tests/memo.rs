use super::*;

fn capacity(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn second_call_is_served_from_cache() {
    let stub = lyrics_stub();
    let composer = Composer::new(&stub).with_cache(capacity(4));

    let first = composer.process("食べる").unwrap();
    let second = composer.process("食べる").unwrap();

    assert_eq!(first, second);
    assert_eq!(stub.calls(), 1);

    let stats = composer.cache_stats().unwrap();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.len, 1);
}

#[test]
fn every_view_from_one_segmentation() {
    let stub = lyrics_stub();
    let composer = Composer::new(&stub).with_cache(capacity(4));

    for format in LyricsFormat::ALL {
        composer.render("私は食べる", format).unwrap();
    }
    composer.annotate("私は食べる").unwrap();
    composer.readings("私は食べる").unwrap();

    assert_eq!(stub.calls(), 1);
}

#[test]
fn cached_and_uncached_results_agree() {
    let cached = Composer::new(lyrics_stub()).with_cache(capacity(1));
    let plain = Composer::new(lyrics_stub());

    for text in ["食べる", "学校", "食べる", "君の名は。", "食べる"] {
        assert_eq!(cached.process(text).unwrap(), plain.process(text).unwrap());
    }
}

#[test]
fn without_cache_every_call_segments() {
    let stub = lyrics_stub();
    let composer = Composer::new(&stub);

    composer.process("食べる").unwrap();
    composer.process("食べる").unwrap();

    assert_eq!(stub.calls(), 2);
    assert!(composer.cache_stats().is_none());
}

#[test]
fn failures_are_not_cached() {
    let stub = StubSegmenter::failing();
    let composer = Composer::new(&stub).with_cache(capacity(4));

    assert!(composer.process("食べる").is_err());
    assert!(composer.process("食べる").is_err());

    assert_eq!(stub.calls(), 2);
    assert_eq!(composer.cache_stats().unwrap().len, 0);
}

#[test]
fn eviction_only_costs_work() {
    let stub = lyrics_stub();
    let composer = Composer::new(&stub).with_cache(capacity(1));

    let a = composer.process("食べる").unwrap();
    composer.process("学校").unwrap();
    let again = composer.process("食べる").unwrap();

    assert_eq!(a, again);
    assert_eq!(stub.calls(), 3);
}

#[test]
fn shared_across_threads() {
    let composer = Arc::new(Composer::new(lyrics_stub()).with_cache(capacity(8)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let composer = Arc::clone(&composer);
            std::thread::spawn(move || {
                for text in ["食べる", "学校", "こんにちは"] {
                    let result = composer.process(text).unwrap();
                    assert_eq!(result.original, text);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert!(composer.segmenter().calls() <= 12);
    assert_eq!(composer.cache_stats().unwrap().len, 3);
}
