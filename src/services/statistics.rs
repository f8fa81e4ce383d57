use serde::Serialize;

use crate::db::entities::{Member, Setlist, Song};

/// Songs whose truncated adoption rate reaches this count as widely adopted
const HIGH_ADOPTION_PERCENT: i64 = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongStat {
    pub song_id: String,
    pub title: String,
    pub performances: usize,
    /// Percentage of setlists that include the song, one decimal place
    pub adoption_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStat {
    pub member_id: String,
    pub name: String,
    pub participation_count: usize,
    /// Percentage of all setlist slots the member performs in, one decimal place
    pub participation_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_setlists: usize,
    pub total_songs: usize,
    pub total_members: usize,
    pub high_adoption_songs: usize,
}

/// Number of setlists that play `song_id` at least once
pub fn performances(song_id: &str, setlists: &[Setlist]) -> usize {
    setlists.iter().filter(|sl| sl.includes_song(song_id)).count()
}

/// Adoption rate per song, most performed first. Ties keep collection order.
pub fn song_adoption(songs: &[Song], setlists: &[Setlist]) -> Vec<SongStat> {
    let total_setlists = setlists.len();

    let mut stats: Vec<SongStat> = songs
        .iter()
        .map(|song| {
            let performances = performances(&song.id, setlists);
            SongStat {
                song_id: song.id.clone(),
                title: song.title_ja.clone(),
                performances,
                adoption_rate: percentage(performances, total_setlists),
            }
        })
        .collect();

    stats.sort_by(|a, b| b.performances.cmp(&a.performances));
    stats
}

/// Participation rate per member over every (setlist, song) slot.
///
/// Ranked by the rate truncated to a whole percent, so 87.9 and 87.1 tie and
/// keep collection order.
pub fn member_participation(members: &[Member], setlists: &[Setlist]) -> Vec<MemberStat> {
    let total_opportunities: usize = setlists.iter().map(|sl| sl.songs.len()).sum();

    let mut stats: Vec<MemberStat> = members
        .iter()
        .map(|member| {
            let participation_count = setlists
                .iter()
                .flat_map(|sl| sl.songs.iter())
                .filter(|slot| slot.features(&member.id))
                .count();

            MemberStat {
                member_id: member.id.clone(),
                name: member.name_ja.clone(),
                participation_count,
                participation_rate: percentage(participation_count, total_opportunities),
            }
        })
        .collect();

    stats.sort_by_key(|stat| std::cmp::Reverse(whole_percent(stat.participation_rate)));
    stats
}

pub fn summarize(
    songs: &[Song],
    members: &[Member],
    setlists: &[Setlist],
    song_stats: &[SongStat],
) -> DashboardSummary {
    DashboardSummary {
        total_setlists: setlists.len(),
        total_songs: songs.len(),
        total_members: members.len(),
        high_adoption_songs: song_stats
            .iter()
            .filter(|s| whole_percent(s.adoption_rate) >= HIGH_ADOPTION_PERCENT)
            .count(),
    }
}

/// `part / whole * 100` rounded to one decimal; zero when `whole` is zero
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / whole as f64 * 100.0)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn whole_percent(rate: f64) -> i64 {
    rate.trunc() as i64
}
