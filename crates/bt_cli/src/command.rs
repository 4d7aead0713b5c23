// 대화형 세션의 한 줄 명령 → 폼 이벤트
use std::path::PathBuf;

use bt_core::{FormEvent, SessionKey, ShotEntry, Zone};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(FormEvent),
    Show,
    Zones,
    Report(Option<PathBuf>),
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
Comandi:
  date YYYY-MM-DD                      data della sessione
  players A,B,C                        giocatori presenti
  click X Y                            clic sul campo (coordinate canvas)
  zone <1-7|nome>                      seleziona la zona
  shots <giocatore> <2pt> <3pt> <pat> [tentativi]
  show                                 dati della sessione
  zones                                elenco zone
  report [cartella]                    genera il PDF
  help | quit";

pub fn parse_line(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "date" => {
            let key: SessionKey = rest.parse().map_err(|e: bt_core::ShotError| e.to_string())?;
            Command::Event(FormEvent::SetDate { date: key.date() })
        }
        "players" => {
            let players = rest.split(',').map(str::trim).filter(|p| !p.is_empty()).map(String::from).collect();
            Command::Event(FormEvent::SelectPlayers { players })
        }
        "click" => {
            let coords = numbers::<f64>(rest)?;
            let [x, y] = coords[..] else {
                return Err("uso: click X Y".to_string());
            };
            Command::Event(FormEvent::CanvasClick { x, y })
        }
        "zone" => {
            let zone = Zone::parse_choice(rest).map_err(|e| e.to_string())?;
            Command::Event(FormEvent::PickZone { zone })
        }
        "shots" => parse_shots(rest)?,
        "show" => Command::Show,
        "zones" => Command::Zones,
        "report" => Command::Report((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("comando sconosciuto: {} (prova 'help')", other)),
    };
    Ok(command)
}

fn parse_shots(rest: &str) -> Result<Command, String> {
    const USAGE: &str = "uso: shots <giocatore> <2pt> <3pt> <pat> [tentativi]";
    let mut parts = rest.split_whitespace();
    let player = parts.next().ok_or(USAGE)?;
    let counts = numbers::<u32>(&parts.collect::<Vec<_>>().join(" "))?;
    let (two_pt, three_pt, pat, attempts) = match counts[..] {
        [a, b, c] => (a, b, c, 0),
        [a, b, c, d] => (a, b, c, d),
        _ => return Err(USAGE.to_string()),
    };
    Ok(Command::Event(FormEvent::Submit(ShotEntry { player: player.to_string(), two_pt, three_pt, pat, attempts })))
}

fn numbers<T: std::str::FromStr>(input: &str) -> Result<Vec<T>, String> {
    input
        .split_whitespace()
        .map(|s| s.parse::<T>().map_err(|_| format!("numero non valido: {}", s)))
        .collect()
}
