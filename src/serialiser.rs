use crate::cue::Cue;

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use log::warn;

pub fn serialise<W: Write>(cues: &[Cue], output: W) -> Result<()> {
    let mut writer = BufWriter::new(output);
    write_cues(&mut writer, cues).context("Failed to write WebVTT output.")?;
    writer.flush().context("Failed to write WebVTT output.")?;
    Ok(())
}

fn write_cues<W: Write>(buf: &mut W, cues: &[Cue]) -> Result<()> {
    writeln!(buf, "WEBVTT")?;
    writeln!(buf)?;

    let mut seqnum = 0;
    for cue in cues {
        if !cue.start_time.is_finite() || !cue.end_time.is_finite() {
            warn!(
                "Skipping cue with unrepresentable timing {} --> {}: '{}'",
                cue.start_time, cue.end_time, cue.text
            );
            continue;
        }
        seqnum += 1;
        write_cue(buf, seqnum, cue)?;
    }
    Ok(())
}

fn write_cue<W: Write>(buf: &mut W, seqnum: usize, cue: &Cue) -> Result<()> {
    writeln!(buf, "{}", seqnum)?;
    write_ts(buf, cue.start_time)?;
    write!(buf, " --> ")?;
    write_ts(buf, cue.end_time)?;
    writeln!(buf)?;
    for line in cue.lines() {
        writeln!(buf, "{}", line)?;
    }
    writeln!(buf)?;
    Ok(())
}

fn write_ts<W: Write>(buf: &mut W, seconds: f64) -> Result<()> {
    // Negative times saturate to zero.
    let total_millis = (seconds * 1000.0).round() as u64;
    let total_secs = total_millis / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = total_millis % 1000;
    write!(
        buf,
        "{:02}:{:02}:{:02}.{:03}",
        hours, minutes, seconds, millis
    )?;
    Ok(())
}
