//! CSV export of a play subset (situation and outcome, no tracking frames).

use crate::logic::resolvers::{
    resolve_field_zone, resolve_pass_direction, resolve_play_type, resolve_shotgun,
    resolve_touchdown, yards_gained,
};
use crate::models::{Direction, FieldZone, Play, PlayType, QueryError};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct PlayRow<'a> {
    game_id: Option<u64>,
    play_id: Option<u64>,
    quarter: Option<u8>,
    down: Option<u8>,
    yards_to_go: Option<u32>,
    yardline: Option<f64>,
    field_zone: &'static str,
    offense: Option<&'a str>,
    defense: Option<&'a str>,
    play_type: &'static str,
    pass_result: Option<&'a str>,
    pass_direction: &'static str,
    yards_gained: f64,
    shotgun: Option<bool>,
    touchdown: bool,
    coverage_tightness: Option<f64>,
    description: Option<&'a str>,
}

impl<'a> PlayRow<'a> {
    fn from_play(play: &'a Play) -> Self {
        Self {
            game_id: play.game_id,
            play_id: play.play_id,
            quarter: play.quarter,
            down: play.down,
            yards_to_go: play.yards_to_go,
            yardline: play.yardline,
            field_zone: match resolve_field_zone(play) {
                Some(FieldZone::Redzone) => "redzone",
                Some(FieldZone::Midfield) => "midfield",
                Some(FieldZone::OwnTerritory) => "own_territory",
                None => "",
            },
            offense: play.offense.as_deref(),
            defense: play.defense.as_deref(),
            play_type: match resolve_play_type(play) {
                PlayType::Pass => "pass",
                _ => "run",
            },
            pass_result: play.pass_result.as_deref(),
            pass_direction: match resolve_pass_direction(play) {
                Some(Direction::Left) => "left",
                Some(Direction::Middle) => "middle",
                Some(Direction::Right) => "right",
                None => "",
            },
            yards_gained: yards_gained(play),
            shotgun: resolve_shotgun(play),
            touchdown: resolve_touchdown(play),
            coverage_tightness: play.coverage_tightness,
            description: play.description.as_deref(),
        }
    }
}

/// Write one CSV row per play, with a header row.
pub fn write_plays_csv<'a, I, W>(plays: I, writer: W) -> Result<(), QueryError>
where
    I: IntoIterator<Item = &'a Play>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for play in plays {
        wtr.serialize(PlayRow::from_play(play))?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV for `plays` as a string.
pub fn plays_to_csv<'a, I>(plays: I) -> Result<String, QueryError>
where
    I: IntoIterator<Item = &'a Play>,
{
    let mut buf = Vec::new();
    write_plays_csv(plays, &mut buf)?;
    String::from_utf8(buf).map_err(|e| QueryError::Csv(e.to_string()))
}
