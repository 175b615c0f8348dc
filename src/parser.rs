use crate::cue::Cue;

use log::{debug, trace};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, digit1, multispace0, one_of};
use nom::combinator::{map_res, opt, recognize, rest};
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;

const HEADER: &str = "WEBVTT";
const TIMING_SEPARATOR: &str = "-->";

/// A cue whose timing line has been read, but which may still receive text lines.
struct OpenCue {
    start_time: f64,
    end_time: f64,
    text: Option<String>,
}

impl OpenCue {
    fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
            text: None,
        }
    }

    fn push_line(&mut self, line: &str) {
        match self.text.as_mut() {
            Some(text) => {
                text.push('\n');
                text.push_str(line);
            }
            None => self.text = Some(line.to_string()),
        }
    }

    fn finish(self) -> Option<Cue> {
        let Self {
            start_time,
            end_time,
            text,
        } = self;
        text.map(|text| Cue::new(start_time, end_time, text))
    }
}

/// Parse a WebVTT document into its cues, in the order their timing lines appear.
///
/// Parsing is lenient and never fails. Cues without any text are dropped, and
/// malformed timestamps decode according to [`decode_timestamp`].
pub fn parse(input: &str) -> Vec<Cue> {
    let (input, _) = match optional_bom(input) {
        Ok(res) => res,
        Err(_) => (input, None),
    };

    let mut cues = Vec::new();
    let mut open_cue: Option<OpenCue> = None;

    let mut line_count = 0;
    for (idx, line) in input.lines().enumerate() {
        line_count = idx + 1;
        let line = line.trim();
        if line == HEADER {
            continue;
        }

        if line.contains(TIMING_SEPARATOR) {
            // Documents do not always separate cues with a blank line.
            finalise(&mut cues, open_cue.take(), line_count);
            let (start, end) = timing_tokens(line);
            open_cue = Some(OpenCue::new(decode_timestamp(start), decode_timestamp(end)));
        } else if line.is_empty() {
            finalise(&mut cues, open_cue.take(), line_count);
        } else if let Some(cue) = open_cue.as_mut() {
            cue.push_line(line);
        } else {
            trace!("Skipping line {} outside of a cue: '{}'", line_count, line);
        }
    }
    finalise(&mut cues, open_cue.take(), line_count);

    cues
}

fn finalise(cues: &mut Vec<Cue>, open_cue: Option<OpenCue>, line_no: usize) {
    let open_cue = match open_cue {
        Some(open_cue) => open_cue,
        None => return,
    };
    let (start_time, end_time) = (open_cue.start_time, open_cue.end_time);
    match open_cue.finish() {
        Some(cue) => cues.push(cue),
        None => debug!(
            "Dropping cue {} --> {} without text, closed at line {}",
            start_time, end_time, line_no
        ),
    }
}

/// Decode a timestamp of the form `[[HH:]MM:]SS[.mmm]` into seconds.
///
/// Anything from the first space onward is treated as cue settings and ignored.
/// Hours and minutes without a numeric prefix count as zero. Seconds without
/// one yield NaN. All arithmetic is done in floating point, so oversized
/// components saturate towards infinity instead of overflowing.
pub fn decode_timestamp(token: &str) -> f64 {
    let token = token.trim();
    let token = match token.find(' ') {
        Some(idx) => &token[..idx],
        None => token,
    };

    let mut parts = token.rsplit(':');
    let seconds = parts.next().map_or(f64::NAN, |s| {
        leading_float(s).map_or(f64::NAN, |(_, seconds)| seconds)
    });
    let minutes = parts.next().map_or(0.0, leading_int_or_zero);
    let hours = parts.next().map_or(0.0, leading_int_or_zero);

    hours * 3600.0 + minutes * 60.0 + seconds
}

fn optional_bom(input: &str) -> IResult<&str, Option<&str>> {
    opt(tag("\u{FEFF}"))(input)
}

fn timing_tokens(line: &str) -> (&str, &str) {
    let split: IResult<&str, (&str, &str)> = pair(
        take_until(TIMING_SEPARATOR),
        preceded(tag(TIMING_SEPARATOR), alt((take_until(TIMING_SEPARATOR), rest))),
    )(line);
    match split {
        Ok((_, (start, end))) => (start.trim(), end.trim()),
        Err(_) => (line, ""),
    }
}

fn leading_float(input: &str) -> IResult<&str, f64> {
    // A dangling exponent (`2.5e`) still reads as `2.5`.
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), opt(digit1))))),
        recognize(pair(char('.'), digit1)),
    ));
    let exponent = tuple((one_of("eE"), opt(one_of("+-")), digit1));
    let number = alt((tag("Infinity"), recognize(pair(mantissa, opt(exponent)))));
    preceded(
        multispace0,
        map_res(recognize(pair(opt(one_of("+-")), number)), |s: &str| {
            s.parse::<f64>()
        }),
    )(input)
}

/// Integer prefix of `input`, as `f64` so that any number of digits is accepted.
fn leading_int(input: &str) -> IResult<&str, f64> {
    preceded(
        multispace0,
        map_res(recognize(pair(opt(one_of("+-")), digit1)), |s: &str| {
            s.parse::<f64>()
        }),
    )(input)
}

fn leading_int_or_zero(input: &str) -> f64 {
    leading_int(input).map_or(0.0, |(_, value)| value)
}
