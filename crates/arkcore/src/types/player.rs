//! Player list parsing

/// Line prefix the server uses when nobody is connected ("No Players Connected")
pub const NO_PLAYERS_PREFIX: &str = "No";

/// Parse the reply to `listplayers` into display names
///
/// Each player line looks like `"<name>, <id>"`. Blank lines, the
/// "no players" line and lines without a `", "` separator are skipped.
pub fn parse_player_list(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(NO_PLAYERS_PREFIX))
        .filter_map(|line| {
            let mut parts = line.split(", ");
            let name = parts.next()?;
            parts.next()?;
            Some(name.to_string())
        })
        .collect()
}
