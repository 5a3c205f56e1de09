use calread::{Event, types::CalDate};

fn date(y: i32, m: u32, d: u32) -> CalDate {
    CalDate::from_ymd_opt(y, m, d).unwrap()
}

pub mod line {
    use calread::{ContentLineParser, LineReader};
    use itertools::Itertools;

    #[test]
    fn unfolds_fixture() {
        let input = include_bytes!("./resources/ical_folded.ics");
        let lines = LineReader::from_slice(input.as_slice())
            .map(|line| line.unwrap().into_inner())
            .collect_vec();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCALENDAR",
                "BEGIN:VEVENT",
                "UID:folded@example.com",
                "DTSTART;VALUE=DATE:20230606",
                "SUMMARY:A summary that has been folded twice",
                "END:VEVENT",
                "END:VCALENDAR",
            ]
        );
    }

    #[test]
    fn content_lines_keep_numbers() {
        let input = include_bytes!("./resources/ical_folded.ics");
        let numbers = ContentLineParser::from_slice(input.as_slice())
            .map(|line| {
                let line = line.unwrap();
                (line.line, line.name)
            })
            .collect_vec();
        assert_eq!(
            numbers,
            vec![
                (1, "BEGIN".to_owned()),
                (2, "BEGIN".to_owned()),
                (3, "UID".to_owned()),
                (5, "DTSTART;VALUE=DATE".to_owned()),
                (8, "SUMMARY".to_owned()),
                (11, "END".to_owned()),
                (12, "END".to_owned()),
            ]
        );
    }
}

pub mod decoder {
    use crate::date;
    use calread::{Calendar, Event, ParserError, decode};
    use itertools::Itertools;

    #[test_log::test]
    fn ical_events() {
        let input = include_str!("./resources/ical_events.ics");
        let calendar = decode(input.as_bytes()).unwrap();

        similar_asserts::assert_eq!(
            calendar.into_events(),
            vec![
                Event::builder()
                    .uid("draft@example.com")
                    .summary("Undated draft")
                    .build(),
                Event::builder()
                    .uid("holiday@example.com")
                    .start(date(2023, 1, 1))
                    .end(date(2023, 1, 2))
                    .summary("New Year's Day")
                    .build(),
                Event::builder()
                    .uid("offsite@example.com")
                    .start(date(2023, 3, 10))
                    .end(date(2023, 3, 11))
                    .summary("Team offsite")
                    .location("Lake house")
                    .description("Lunch included")
                    .build(),
                Event::builder()
                    .uid("retro@example.com")
                    .start(date(2023, 4, 14))
                    .end(date(2023, 4, 14))
                    .summary("Sprint retro")
                    .location("Room 4, second floor")
                    .description("What went well? What didn't?  Bring post-its; markers.")
                    .build(),
            ]
        );
    }

    #[test]
    fn ical_events_rendering() {
        let input = include_str!("./resources/ical_events.ics");
        let calendar: Calendar = input.parse().unwrap();
        let retro = calendar
            .iter()
            .find(|event| event.uid() == "retro@example.com")
            .unwrap();
        insta::assert_snapshot!(retro, @r"
        UID:retro@example.com
        Start: 2023-04-14
        End: 2023-04-14
        Summary: Sprint retro
        Location: Room 4, second floor
        Description: What went well? What didn't?  Bring post-its; markers.
        ");
    }

    #[test]
    fn ical_folded() {
        let input = include_str!("./resources/ical_folded.ics");
        let calendar = decode(input.as_bytes()).unwrap();
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar[0].uid(), "folded@example.com");
        assert_eq!(calendar[0].start(), Some(date(2023, 6, 6)));
        assert_eq!(calendar[0].summary(), "A summary that has been folded twice");
    }

    #[test_log::test]
    fn ical_truncated() {
        let input = include_str!("./resources/ical_truncated.ics");
        let calendar = decode(input.as_bytes()).unwrap();
        assert_eq!(calendar.iter().map(Event::uid).collect_vec(), vec!["b", "a"]);
        assert_eq!(calendar[0].summary(), "cut off");
    }

    #[test]
    fn ical_malformed() {
        let input = include_str!("./resources/ical_malformed.ics");
        let err = decode(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ParserError::MalformedLine { line: 5 }), "{err:?}");
        assert_eq!(err.to_string(), "Line 5: Missing a \":\" delimiter.");
    }

    #[test]
    fn from_file() {
        let file = std::fs::File::open("./tests/resources/ical_events.ics").unwrap();
        let calendar = decode(file).unwrap();
        assert_eq!(calendar.len(), 4);
    }

    #[test]
    fn event_without_calendar() {
        let err = decode("BEGIN:VEVENT\nUID:1\nEND:VEVENT\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParserError::Structure("expected BEGIN:VCALENDAR")));
    }

    #[test]
    fn events_are_independent_between_decodes() {
        let first = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\nEND:VEVENT\nEND:VCALENDAR\n";
        let second = "BEGIN:VCALENDAR\nEND:VCALENDAR\n";
        assert_eq!(decode(first.as_bytes()).unwrap().len(), 1);
        assert!(decode(second.as_bytes()).unwrap().is_empty());
    }
}

pub mod options {
    use calread::{CalendarDecoder, LineEndings, ParserOptions, decode_with_options};
    use rstest::rstest;

    const INPUT: &[u8] =
        b"BEGIN:VCALENDAR\nBEGIN:VEVENT\nSUMMARY:first\r\n second\nEND:VEVENT\nEND:VCALENDAR\n";

    #[rstest]
    #[case(LineEndings::Strip, "firstsecond")]
    #[case(LineEndings::Preserve, "first\rsecond")]
    fn decodes_with_line_endings(#[case] line_endings: LineEndings, #[case] summary: &str) {
        let calendar = decode_with_options(INPUT, ParserOptions { line_endings }).unwrap();
        assert_eq!(calendar[0].summary(), summary);
    }

    #[test]
    fn default_strips() {
        assert_eq!(ParserOptions::default().line_endings, LineEndings::Strip);
        let calendar = CalendarDecoder::from_slice(INPUT).decode().unwrap();
        assert_eq!(calendar[0].summary(), "firstsecond");
    }
}

pub mod stream {
    use calread::{ParserError, decode};
    use std::io::{self, Read};

    /// Hands out `data`, then fails.
    struct FailingReader<'a> {
        data: &'a [u8],
    }

    impl Read for FailingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "gone"));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn read_failure_is_stream_error() {
        let reader = FailingReader {
            data: b"BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\n",
        };
        match decode(reader).unwrap_err() {
            ParserError::Stream(err) => assert_eq!(err.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_stream_error() {
        let input: &[u8] = b"BEGIN:VCALENDAR\nBEGIN:VEVENT\nSUMMARY:\xff\nEND:VEVENT\nEND:VCALENDAR\n";
        match decode(input).unwrap_err() {
            ParserError::Stream(err) => assert_eq!(err.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn event_display_matches_fields() {
    let event = Event::builder()
        .uid("x")
        .start(date(2024, 2, 29))
        .build();
    let rendered = event.to_string();
    let lines = rendered.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "UID:x");
    assert_eq!(lines[1], "Start: 2024-02-29");
}
