use courtside::core::models::roster::TeamDirectory;
use courtside::workflows::assemble::TeamRequest;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Team selector cannot be empty.")]
    EmptySelector,

    #[error("Unknown team '{0}'. Run 'courtside teams' to list the available teams.")]
    UnknownTeam(String),
}

/// How a team was named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSelector {
    Id(u64),
    Name(String),
}

pub fn parse_team_selector(input: &str) -> Result<TeamSelector, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptySelector);
    }
    Ok(match trimmed.parse::<u64>() {
        Ok(id) => TeamSelector::Id(id),
        Err(_) => TeamSelector::Name(trimmed.to_string()),
    })
}

/// Turns a selector into a request using the source's team table.
///
/// A numeric id absent from the table is still accepted (some exports ship
/// without teams.csv); the team is then named after its id.
pub fn resolve_team(
    selector: &TeamSelector,
    directory: &TeamDirectory,
) -> Result<TeamRequest, ParseError> {
    match selector {
        TeamSelector::Id(id) => Ok(match directory.find_by_id(*id) {
            Some(team) => TeamRequest::new(&team.name, team.id),
            None => TeamRequest::new(&format!("Team {id}"), *id),
        }),
        TeamSelector::Name(name) => directory
            .find(name)
            .map(|team| TeamRequest::new(&team.name, team.id))
            .ok_or_else(|| ParseError::UnknownTeam(name.clone())),
    }
}
