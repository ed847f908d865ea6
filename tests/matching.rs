use renfa::{Error, MatchState, Pattern};

fn init_logging() {
    let _ = simple_logger::init_with_level(log::Level::Warn);
}

fn assert_prefix(pattern: &str, input: &str, expected: &str) {
    init_logging();
    let compiled = Pattern::compile(pattern).expect("pattern should compile");
    let mut buf = [0u8; 64];
    let result = compiled.match_prefix(input, &mut buf);
    assert_eq!(MatchState::Ok, result.state, "{pattern} on {input}");
    assert_eq!(expected.as_bytes(), result.result, "{pattern} on {input}");
    assert_eq!(0, result.start);
    assert_eq!(expected.len(), result.end);
}

fn assert_no_match(pattern: &str, input: &str) {
    init_logging();
    let compiled = Pattern::compile(pattern).expect("pattern should compile");
    let mut buf = [0u8; 64];
    let result = compiled.match_prefix(input, &mut buf);
    assert_eq!(MatchState::NoMatch, result.state, "{pattern} on {input}");
}

#[test]
fn literal_prefix() {
    assert_prefix("ab", "abc", "ab");
}

#[test]
fn grouped_alternation() {
    assert_prefix("a(b|c)d", "acd", "acd");
}

#[test]
fn star_takes_the_longest_run() {
    assert_prefix("a*b", "aaab", "aaab");
}

#[test]
fn plus_needs_at_least_one() {
    assert_no_match("a+b", "b");
}

#[test]
fn class_repeats() {
    assert_prefix("[0-9]+", "42x", "42");
}

#[test]
fn negated_class_repeats() {
    assert_prefix("[^0-9]+", "abc1", "abc");
}

#[test]
fn class_letters_between_literals() {
    assert_prefix("\\d\\d:\\d\\d", "09:30h", "09:30");
}

#[test]
fn unterminated_class_fails() {
    init_logging();
    assert!(matches!(
        Pattern::compile("a["),
        Err(Error::MalformedClass(_))
    ));
}

#[test]
fn quantifiers_on_the_empty_input() {
    assert_prefix("a*", "", "");
    assert_no_match("a+", "");
}

#[test]
fn class_mixing_letters_and_literals() {
    assert_prefix("[\\da]+", "1a2b", "1a2");
}

#[test]
fn an_empty_class_matches_nothing() {
    assert_no_match("[]", "x");
    assert_no_match("a[]b", "ab");
}

#[test]
fn a_negated_empty_class_matches_any_byte() {
    assert_prefix("[^]", "xy", "x");
    assert_prefix("[^]+", "ab", "ab");
}

#[test]
fn dot_stops_at_line_breaks() {
    assert_prefix(".+", "ab\ncd", "ab");
}

#[test]
fn anchored_match() {
    assert_prefix("^a+", "aab", "aa");
}

#[test]
fn optional_tail_reports_the_longest_observed_prefix() {
    assert_prefix("ab(cd)?", "abcx", "ab");
    assert_prefix("ab(cd)?", "abcd", "abcd");
}

#[test]
fn alternation_accepts_the_union() {
    init_logging();
    let left = Pattern::compile("ab").unwrap();
    let right = Pattern::compile("cd").unwrap();
    let both = Pattern::compile("ab|cd").unwrap();
    for input in ["ab", "cd", "ad", "cb", "a", ""] {
        let mut b0 = [0u8; 8];
        let mut b1 = [0u8; 8];
        let mut b2 = [0u8; 8];
        let union = both.match_prefix(input, &mut b0).is_match();
        let either = left.match_prefix(input, &mut b1).is_match()
            || right.match_prefix(input, &mut b2).is_match();
        assert_eq!(either, union, "input {input:?}");
    }
}

#[test]
fn plain_literals_match_themselves() {
    for input in ["hello", "x", "with space", "0123"] {
        assert_prefix(input, input, input);
    }
}

#[test]
fn short_buffer_reports_the_partial_prefix() {
    init_logging();
    let pattern = Pattern::compile("[a-z]+").unwrap();
    let mut buf = [0u8; 3];
    let result = pattern.match_prefix("abcdef", &mut buf);
    assert_eq!(MatchState::Err(Error::BufferFull(3)), result.state);
    assert_eq!(b"abc", result.result);
}

#[test]
fn an_exactly_sized_buffer_is_enough() {
    init_logging();
    let pattern = Pattern::compile("[a-z]+").unwrap();
    let mut buf = [0u8; 3];
    let result = pattern.match_prefix("abc", &mut buf);
    assert_eq!(MatchState::Ok, result.state);
    assert_eq!(b"abc", result.result);
}

#[test]
fn nesting_beyond_the_limit_fails() {
    init_logging();
    let mut pattern = "(".repeat(101);
    pattern.push('a');
    assert!(matches!(Pattern::compile(&pattern), Err(Error::Syntax(_))));
}

#[test]
fn oversized_patterns_exhaust_the_token_pool() {
    init_logging();
    let pattern = "a".repeat(200);
    assert!(matches!(
        Pattern::compile(&pattern),
        Err(Error::PoolExhausted(_))
    ));
}

#[test]
fn reserved_metacharacters_are_rejected() {
    init_logging();
    for pattern in ["ab$", "a{1}", "a\\"] {
        assert!(
            matches!(Pattern::compile(pattern), Err(Error::Syntax(_))),
            "{pattern}"
        );
    }
}

#[test]
fn mixed_range_endpoints_are_rejected() {
    init_logging();
    assert_eq!(
        Err(Error::BadRange(b'a', b'9')),
        Pattern::compile("[a-9]").map(|_| ())
    );
}
