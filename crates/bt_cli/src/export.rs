// 리포트 저장 (session / replay 공용)
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use bt_core::report::{build_report, write_player_diagrams};
use bt_core::{CourtRenderer, Form};

/// 현재 날짜의 세션을 PDF로 저장. 데이터가 없으면 안내만 출력.
pub fn export_report<W: Write>(
    form: &Form,
    renderer: &CourtRenderer,
    dir: &Path,
    keep_images: bool,
    out: &mut W,
) -> Result<bool> {
    let key = form.session_key();
    let Some(session) = form.state().store.session(key) else {
        writeln!(out, "ℹ️ Nessun dato per {}: nessun report generato.", key)?;
        return Ok(false);
    };
    let zones = &form.context().zones;

    let Some(report) = build_report(key, session, zones, renderer)? else {
        writeln!(out, "ℹ️ Nessun dato per {}: nessun report generato.", key)?;
        return Ok(false);
    };
    let path = report.write_to(dir)?;
    writeln!(out, "\n📄 Report salvato: {}", path.display())?;
    writeln!(out, "   Pagine:   {}", report.pages)?;
    writeln!(out, "   Formato:  {}", report.mime)?;
    writeln!(out, "   ID:       {}", report.id)?;

    if keep_images {
        for diagram in write_player_diagrams(dir, key, session, zones, renderer)? {
            writeln!(out, "   🖼️  {}", diagram.display())?;
        }
    }
    Ok(true)
}
