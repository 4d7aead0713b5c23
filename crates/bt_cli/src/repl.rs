//! Interactive session
//!
//! stdin 한 줄 = 명령 하나. 폼 이벤트는 `Form::dispatch`로 넘기고
//! 안내 메시지를 그대로 출력한다.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use bt_core::{CourtRenderer, Form, ZoneMap};

use crate::command::{parse_line, Command, HELP};
use crate::export::export_report;

pub fn run<R: BufRead, W: Write>(
    form: &mut Form,
    renderer: &CourtRenderer,
    report_dir: &Path,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "🏀 Sessione di Tiri - {} (scrivi 'help')", form.session_key())?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "⚠️ {}", message)?;
                continue;
            }
        };

        match command {
            Command::Empty => {}
            Command::Event(event) => {
                for notice in form.dispatch(event) {
                    writeln!(out, "{}", notice)?;
                }
            }
            Command::Show => match form.view() {
                Ok(view) => write!(out, "{}", view)?,
                Err(notice) => writeln!(out, "{}", notice)?,
            },
            Command::Zones => print_zones(&form.context().zones, out)?,
            Command::Report(dir) => {
                export_report(form, renderer, dir.as_deref().unwrap_or(report_dir), false, out)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
        out.flush()?;
    }
    log::debug!("Session closed on {}", form.session_key());
    Ok(())
}

pub fn print_zones<W: Write>(map: &ZoneMap, out: &mut W) -> Result<()> {
    writeln!(out, "Zone ({}x{} canvas):", map.canvas.width, map.canvas.height)?;
    for region in map.regions() {
        writeln!(
            out,
            "  {}. {:<16} x {:>4}-{:<4} y {:>4}-{:<4} campo ({:.0}, {:.0})",
            region.zone.index(),
            region.zone.label(),
            region.canvas.x[0],
            region.canvas.x[1],
            region.canvas.y[0],
            region.canvas.y[1],
            region.court.x,
            region.court.y,
        )?;
    }
    Ok(())
}
