// End-to-end scenarios through the library: transcript + source text in,
// line rows and filtered report out.

use coqprof::aggregate::{aggregate, total_seconds};
use coqprof::config::ProfileConfig;
use coqprof::error::ProfileError;
use coqprof::pipeline::profile;
use coqprof::report::{apply, ReportConfig};
use coqprof::source_map::SourceMap;
use coqprof::transcript::parse_transcript;

fn config(top_n: i64, drop_zero: bool) -> ProfileConfig {
    ProfileConfig {
        top_n_rows: top_n,
        drop_zero_time_rows: drop_zero,
        max_display_width: 20,
        ..ProfileConfig::default()
    }
}

#[test]
fn test_two_line_scenario() {
    let transcript = "Result X [Chars 0 - 1 [foo]] 0.000000 secs\nResult X [Chars 2 - 4 [bar]] 2.500000 secs";

    let unfiltered = profile(transcript, "a\nbc", "a.v", &config(0, false)).unwrap();
    let lines: Vec<_> = unfiltered
        .report
        .rows
        .iter()
        .map(|r| (r.line, r.total_seconds))
        .collect();
    assert_eq!(lines, vec![(1, 0.0), (2, 2.5)]);

    let filtered = profile(transcript, "a\nbc", "a.v", &config(0, true)).unwrap();
    assert_eq!(filtered.report.rows.len(), 1);
    assert_eq!(filtered.report.rows[0].line, 2);
    assert_eq!(filtered.report.rows[0].total_seconds, 2.5);
    assert_eq!(filtered.report.total_time, 2.5);
    // the full row set is untouched by filtering
    assert_eq!(filtered.rows.len(), 2);
}

#[test]
fn test_grouping_scenario() {
    // Lines 4 and 5 start at offsets 9 and 14
    let source = "a\nbb\nccc\ndddd\neeeee";
    let transcript = "\
Chars 9 - 10 [x] 0.5 secs (0.u,0.s) (success)
Chars 11 - 12 [y] 1.2 secs (0.u,0.s) (success)
Chars 14 - 18 [z] 0.3 secs (0.u,0.s) (success)";

    let records = parse_transcript(transcript).unwrap();
    let map = SourceMap::new(source);
    let rows = aggregate(&records, &map, 10).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 4);
    assert!((rows[0].total_seconds - 1.7).abs() < 1e-9);
    assert_eq!(rows[1].line, 5);
    assert!((rows[1].total_seconds - 0.3).abs() < 1e-9);
}

#[test]
fn test_multi_line_span_attributed_to_start_line() {
    let source = "Lemma x :\n  True.\nProof. exact I. Qed.";
    let transcript = "Chars 0 - 17 [Lemma~x~:~True.] 0.1 secs (0.u,0.s) (success)";

    let result = profile(transcript, source, "x.v", &config(0, false)).unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].line, 1);
    assert_eq!(result.rows[0].display_text, "1: Lemma x :   True.   ");
}

#[test]
fn test_malformed_record_produces_no_report() {
    let transcript = "Chars 0 - 1 [a] 0.1 secs\nsomething] 0.4 secs";
    let err = profile(transcript, "ab", "a.v", &config(0, false)).unwrap_err();
    assert!(matches!(err, ProfileError::MalformedRecord { line: 2, .. }));
}

#[test]
fn test_source_mismatch_is_out_of_range() {
    let transcript = "Chars 0 - 1 [a] 0.1 secs\nChars 40 - 45 [b] 0.1 secs";
    let err = profile(transcript, "short", "a.v", &config(0, false)).unwrap_err();
    assert_eq!(
        err,
        ProfileError::OffsetOutOfRange {
            line: 2,
            offset: 40,
            len: 5
        }
    );
}

#[test]
fn test_lines_without_timing_do_not_count() {
    let transcript = "\
Welcome
Chars 0 - 1 [a] 0.25 secs (0.u,0.s) (success)
Finished transaction in 3.0 secs (3.u,0.s) (successful)
Chars 2 - 3 [b] 0.5 secs (0.u,0.s) (success)";
    let result = profile(transcript, "a\nb", "a.v", &config(0, false)).unwrap();
    assert_eq!(total_seconds(&result.rows), 0.75);
}

#[test]
fn test_top_n_then_line_order() {
    let source = "1\n2\n3\n4\n5\n6";
    let transcript = "\
Chars 0 - 1 [a] 0.4 secs
Chars 2 - 3 [b] 3.0 secs
Chars 4 - 5 [c] 0.1 secs
Chars 6 - 7 [d] 0.0 secs
Chars 8 - 9 [e] 2.0 secs
Chars 10 - 11 [f] 0.4 secs";
    let records = parse_transcript(transcript).unwrap();
    let rows = aggregate(&records, &SourceMap::new(source), 5).unwrap();

    let shown = apply(
        &rows,
        &ReportConfig {
            top_n: 3,
            drop_zero_time: true,
        },
    );
    let lines: Vec<_> = shown.iter().map(|r| r.line).collect();
    // 0.4 ties between lines 1 and 6; the earlier row wins
    assert_eq!(lines, vec![1, 2, 5]);
}

#[test]
fn test_shortened_sentences_are_profiled() {
    let source = "Lemma l : forall H, H.\nProof.\n  destruct H as [[a b] [c d] [e f]].\nQed.";
    let transcript = "\
Chars 0 - 22 [Lemma~l~:~forall~H,~H.] 0.010 secs (0.u,0.s) (success)
Chars 23 - 29 [Proof.] 0. secs (0.u,0.s) (success)
Chars 32 - 66 [destruct~H~as~[[a~b]~[c~d]~[e~f]...] 0.120 secs (0.1u,0.02s) (success)
Chars 67 - 71 [Qed.] 0.030 secs (0.u,0.s) (success)";

    let result = profile(transcript, source, "l.v", &config(0, true)).unwrap();
    let lines: Vec<_> = result.report.rows.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![1, 3, 4]);
    assert_eq!(result.report.rows[1].total_seconds, 0.12);
}
